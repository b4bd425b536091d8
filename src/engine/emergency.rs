/// Emergency injection: splices a three-stage pan-pan sub-sequence into the
/// airborne phase at a seed-chosen waypoint group.
use tracing::debug;

use crate::engine::points::{Pose, ScenarioPoint, SimUpdateData};
use crate::engine::seed::Seed;
use crate::engine::stages::{EmergencyType, Stage};
use crate::data::Waypoint;
use crate::utils::navigation::{lerp, lerp_coord};

/// Inserts DeclareEmergency / WilcoInstructions / CancelPanPan after the end
/// of the chosen frequency-change group. The final sequence is built by
/// merging prefix + triplet + suffix; the points around the splice are never
/// mutated and trailing indices are not renumbered (the triplet takes the
/// next fresh indices). Returns the sequence and the updated index counter.
///
/// The group is the last one whose tracked waypoint is at or before the
/// seed-chosen waypoint, clamped so the splice stays before the final group
/// whenever there are two or more groups. Triplet times interpolate between
/// the adjacent points and are clamped to the following point's time, which
/// keeps elapsed time monotonic along the list.
pub fn inject_emergency(
    points: Vec<ScenarioPoint>,
    next_index: usize,
    seed: &Seed,
    waypoints: &[Waypoint],
) -> (Vec<ScenarioPoint>, usize) {
    if points.is_empty() || waypoints.len() < 2 {
        return (points, next_index);
    }

    let scenario_seed = seed.scenario_seed as usize;

    // Never the first waypoint: the emergency happens en route
    let emergency_wp_index = (scenario_seed % (waypoints.len() - 1)) + 1;

    // A group ends at its ReadbackApproval point
    let group_ends: Vec<(usize, usize)> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.stage == Stage::ReadbackApproval)
        .map(|(i, p)| (i, p.next_waypoint_index))
        .collect();
    if group_ends.is_empty() {
        return (points, next_index);
    }

    let chosen = group_ends
        .iter()
        .rposition(|(_, wp)| *wp <= emergency_wp_index)
        .unwrap_or(0)
        .min(group_ends.len().saturating_sub(2));
    let insert_at = group_ends[chosen].0 + 1;

    // Active kinds only; None is never an emergency
    let kind = EmergencyType::ACTIVE_KINDS[scenario_seed % EmergencyType::ACTIVE_KINDS.len()];

    // Between 5% and 89% of the way back along the segment, so the pan-pan
    // resolves before the next scripted call
    let lerp_pct = (scenario_seed % 85) as f64 / 100.0 + 0.05;
    let position = lerp_coord(
        waypoints[emergency_wp_index].location,
        waypoints[emergency_wp_index - 1].location,
        lerp_pct,
    );

    let before = &points[insert_at - 1];
    let time_before = before.time_at_point;
    let time_after = points.get(insert_at).map(|p| p.time_at_point);

    let declare_time = match time_after {
        Some(after) => lerp(time_before as f64, after as f64, lerp_pct).round() as i64,
        None => time_before,
    };
    let cap = time_after.unwrap_or(i64::MAX);
    let cancel_time = (declare_time + 4).min(cap);
    let wilco_time = (declare_time + 1).min(cancel_time);

    let pose = Pose {
        position,
        true_heading: before.pose.true_heading,
        altitude: before.pose.altitude,
        air_speed: before.pose.air_speed,
    };

    let emergency_update_data = SimUpdateData {
        emergency: kind,
        ..before.update_data.clone()
    };

    debug!(
        "Injecting {} before waypoint {} at {:.0}% of the segment",
        kind,
        emergency_wp_index,
        lerp_pct * 100.0
    );

    let triplet = [
        (Stage::DeclareEmergency, declare_time),
        (Stage::WilcoInstructions, wilco_time),
        (Stage::CancelPanPan, cancel_time),
    ]
    .into_iter()
    .enumerate()
    .map(|(offset, (stage, time))| ScenarioPoint {
        index: next_index + offset,
        stage,
        pose,
        update_data: emergency_update_data.clone(),
        next_waypoint_index: emergency_wp_index,
        time_at_point: time,
    });

    let mut merged = Vec::with_capacity(points.len() + 3);
    merged.extend(points[..insert_at].iter().cloned());
    merged.extend(triplet);
    merged.extend(points[insert_at..].iter().cloned());

    (merged, next_index + 3)
}
