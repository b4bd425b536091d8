/// Scenario points and the per-phase stage generators.
///
/// Each phase is a finite sequence of stages; each stage emits exactly one
/// scenario point with the pose, radio state and elapsed time the trainee
/// must respond to. Points are created here and never mutated afterwards;
/// only the emergency injector inserts new points around them.
use serde::{Deserialize, Serialize};

use crate::config::{GenerationConfig, NAUTICAL_MILE_METRES};
use crate::data::{Aerodrome, Airspace, RadioFrequency, Waypoint};
use crate::engine::error::GenerationError;
use crate::engine::router::Crossing;
use crate::engine::seed::Seed;
use crate::engine::stages::{EmergencyType, Stage};
use crate::utils::navigation::{bearing_between, haversine_distance, Coord};

/// Location, heading, altitude and airspeed of the aircraft. Term borrowed
/// from robotics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub position: Coord,
    pub true_heading: f64,
    pub altitude: f64,
    pub air_speed: f64,
}

/// Radio and transponder state the simulator must match at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimUpdateData {
    /// Whether ATC has modified (shortened) the callsign by this point.
    pub callsign_modified: bool,
    pub squawk: bool,
    pub current_target: String,
    pub current_target_frequency: String,
    pub current_transponder_frequency: String,
    pub current_pressure: u32,
    pub emergency: EmergencyType,
}

/// One emitted radio-exchange event. Not necessarily visible to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPoint {
    pub index: usize,
    pub stage: Stage,
    pub pose: Pose,
    pub update_data: SimUpdateData,
    pub next_waypoint_index: usize,
    /// Minutes since midnight; non-decreasing along the scenario.
    pub time_at_point: i64,
}

/// Elapsed-time estimate for a leg at the average cruise speed, in whole
/// minutes.
pub fn flight_time_minutes(distance_metres: f64, config: &GenerationConfig) -> i64 {
    let nautical_miles = distance_metres / NAUTICAL_MILE_METRES;
    let hours = nautical_miles / config.average_speed_knots;
    (hours * 60.0 * config.flight_time_multiplier).round() as i64
}

fn update_data(frequency: &RadioFrequency, contact_made: bool) -> SimUpdateData {
    SimUpdateData {
        callsign_modified: contact_made,
        squawk: false,
        current_target: frequency.callsign.clone(),
        current_target_frequency: frequency.frequency.clone(),
        current_transponder_frequency: "7000".to_string(),
        current_pressure: 1013,
        emergency: EmergencyType::None,
    }
}

/// Radio state between zones: no target worked yet, transponder standby.
fn enroute_update_data() -> SimUpdateData {
    SimUpdateData {
        callsign_modified: false,
        squawk: false,
        current_target: String::new(),
        current_target_frequency: "000.000".to_string(),
        current_transponder_frequency: "0000".to_string(),
        current_pressure: 1013,
        emergency: EmergencyType::None,
    }
}

fn parked_frequency<'a>(airport: &'a Aerodrome) -> Result<&'a RadioFrequency, GenerationError> {
    airport
        .parked_frequency()
        .ok_or_else(|| GenerationError::MissingFrequency {
            airport: airport.name.clone(),
            role: "parked",
        })
}

fn arrival_frequency<'a>(airport: &'a Aerodrome) -> Result<&'a RadioFrequency, GenerationError> {
    airport
        .arrival_frequency()
        .ok_or_else(|| GenerationError::MissingFrequency {
            airport: airport.name.clone(),
            role: "arrival",
        })
}

/// Departure-phase generator: start-up, taxi, take-off and the climb out of
/// the start aerodrome's zone. The route's first segment must cross the
/// aerodrome's own airspace so the leaving-zone call has a position.
pub fn start_aerodrome_points(
    seed: &Seed,
    airport: &Aerodrome,
    waypoints: &[Waypoint],
    airspaces: &[Airspace],
    config: &GenerationConfig,
) -> Result<Vec<ScenarioPoint>, GenerationError> {
    let scenario_seed = seed.scenario_seed;
    let start_time = airport.start_time(scenario_seed);
    let takeoff_runway = airport.takeoff_runway(scenario_seed);
    let parking = airport.parking_point(scenario_seed);
    let initial_heading = bearing_between(waypoints[0].location, waypoints[1].location);

    let parked_pose = Pose {
        position: parking.position,
        true_heading: parking.heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let holding_pose = Pose {
        position: airport.holding_point,
        true_heading: takeoff_runway.true_heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let taking_off_pose = Pose {
        position: airport.point_along_takeoff_runway(scenario_seed, 0.0),
        true_heading: takeoff_runway.true_heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let climbing_out_pose = Pose {
        position: airport.point_along_takeoff_runway(scenario_seed, 1.0),
        true_heading: takeoff_runway.true_heading,
        altitude: config.climb_out_altitude,
        air_speed: config.climb_out_airspeed,
    };

    let upwind_pose = Pose {
        position: airport.point_along_takeoff_runway(scenario_seed, 1.3),
        true_heading: takeoff_runway.true_heading,
        altitude: config.climb_out_altitude,
        air_speed: config.climb_out_airspeed,
    };

    // The zone boundary crossing of the first route segment
    let departure_airspace = airspaces
        .iter()
        .find(|airspace| airspace.name.contains(&airport.name))
        .ok_or_else(|| GenerationError::MissingDepartureAirspace {
            airport: airport.name.clone(),
        })?;
    let (_, leaving_zone_position) = departure_airspace
        .first_crossing(waypoints[0].location, waypoints[1].location)
        .ok_or_else(|| GenerationError::MissingDepartureAirspace {
            airport: airport.name.clone(),
        })?;
    let leaving_zone_pose = Pose {
        position: leaving_zone_position,
        true_heading: initial_heading,
        altitude: config.climb_out_altitude,
        air_speed: config.climb_out_airspeed,
    };

    let frequency = parked_frequency(airport)?;
    let initial = update_data(frequency, false);
    let contacted = update_data(frequency, true);

    // (stage, pose, minutes after start anchor, contact made)
    let sequence: Vec<(Stage, Pose, i64, bool)> = if airport.is_controlled() {
        vec![
            (Stage::RadioCheck, parked_pose, 0, false),
            (Stage::DepartureInformationRequest, parked_pose, 0, false),
            (Stage::ReadbackDepartureInformation, parked_pose, 1, true),
            (Stage::TaxiRequest, parked_pose, 1, true),
            (Stage::TaxiClearanceReadback, holding_pose, 5, true),
            (Stage::ReadyForDeparture, holding_pose, 8, true),
            (Stage::ReadbackAfterDepartureInformation, holding_pose, 9, true),
            (Stage::ReadbackClearance, holding_pose, 9, true),
            (Stage::ReadbackNextContact, climbing_out_pose, 12, true),
            (Stage::ContactNextFrequency, climbing_out_pose, 15, true),
            (Stage::AcknowledgeNewFrequencyRequest, upwind_pose, 15, true),
            (Stage::ReportLeavingZone, upwind_pose, 18, true),
        ]
    } else {
        vec![
            (Stage::RadioCheck, parked_pose, 0, false),
            (Stage::RequestTaxiInformation, parked_pose, 1, false),
            (Stage::AnnounceTaxiing, holding_pose, 1, true),
            (Stage::ReadyForDeparture, holding_pose, 8, true),
            (Stage::AcknowledgeTraffic, holding_pose, 9, true),
            (Stage::AnnounceTakingOff, taking_off_pose, 10, true),
            (Stage::AnnounceLeavingZone, leaving_zone_pose, 15, true),
        ]
    };

    let points = sequence
        .into_iter()
        .enumerate()
        .map(|(index, (stage, pose, offset, contact_made))| ScenarioPoint {
            index,
            stage,
            pose,
            update_data: if contact_made {
                contacted.clone()
            } else {
                initial.clone()
            },
            next_waypoint_index: 0,
            time_at_point: start_time + offset,
        })
        .collect();

    Ok(points)
}

/// Airborne-phase generator: one fixed six-stage frequency-change group per
/// airspace boundary crossing, at the crossing position and cruise profile.
pub fn airborne_points(
    start_index: usize,
    crossings: &[Crossing],
    previous: &ScenarioPoint,
    config: &GenerationConfig,
) -> Vec<ScenarioPoint> {
    let mut points = Vec::with_capacity(crossings.len() * 6);
    let mut index = start_index;
    let mut previous_position = previous.pose.position;
    let mut previous_time = previous.time_at_point;

    for crossing in crossings {
        let leg = haversine_distance(previous_position, crossing.position);
        let group_time = previous_time + flight_time_minutes(leg, config);

        let pose = Pose {
            position: crossing.position,
            true_heading: bearing_between(previous_position, crossing.position),
            altitude: config.cruise_altitude,
            air_speed: config.cruise_airspeed,
        };

        let group = [
            (Stage::RequestFrequencyChange, 0),
            (Stage::AcknowledgeApproval, 1),
            (Stage::ContactNewFrequency, 1),
            (Stage::PassMessage, 2),
            (Stage::Squawk, 2),
            (Stage::ReadbackApproval, 3),
        ];
        for (stage, offset) in group {
            points.push(ScenarioPoint {
                index,
                stage,
                pose,
                update_data: enroute_update_data(),
                next_waypoint_index: crossing.next_waypoint_index,
                time_at_point: group_time + offset,
            });
            index += 1;
        }

        previous_position = crossing.position;
        previous_time = group_time + 3;
    }

    points
}

/// Arrival-phase generator: join, circuit, landing and taxi to parking.
/// Anchored on a landing time estimated from the previous point's position.
pub fn end_aerodrome_points(
    start_index: usize,
    seed: &Seed,
    airport: &Aerodrome,
    waypoints: &[Waypoint],
    previous: &ScenarioPoint,
    config: &GenerationConfig,
) -> Result<Vec<ScenarioPoint>, GenerationError> {
    let scenario_seed = seed.scenario_seed;
    let landing_runway = airport.landing_runway(scenario_seed);
    let parking = airport.parking_point(scenario_seed);

    let distance_to_airport = haversine_distance(previous.pose.position, airport.location);
    let landing_time =
        previous.time_at_point + 10 + flight_time_minutes(distance_to_airport, config);

    let join_pose = Pose {
        position: airport.point_along_landing_runway(scenario_seed, -4.5),
        true_heading: landing_runway.true_heading,
        altitude: 1500.0,
        air_speed: 90.0,
    };

    let circuit_pose = Pose {
        position: airport.point_along_landing_runway(scenario_seed, -3.6),
        true_heading: landing_runway.true_heading,
        altitude: 1000.0,
        air_speed: 84.0,
    };

    let final_pose = Pose {
        position: airport.point_along_landing_runway(scenario_seed, -1.6),
        true_heading: landing_runway.true_heading,
        altitude: 750.0,
        air_speed: 55.0,
    };

    let on_runway_pose = Pose {
        position: airport.point_along_landing_runway(scenario_seed, 0.0),
        true_heading: landing_runway.true_heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let vacated_pose = Pose {
        position: airport.holding_point,
        true_heading: landing_runway.true_heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let parked_pose = Pose {
        position: parking.position,
        true_heading: parking.heading,
        altitude: 0.0,
        air_speed: 0.0,
    };

    let contacted = update_data(arrival_frequency(airport)?, true);

    // (stage, pose, minutes relative to the landing anchor)
    let sequence: Vec<(Stage, Pose, i64)> = if airport.is_controlled() {
        vec![
            (Stage::RequestJoin, join_pose, -10),
            (Stage::ReportDetails, join_pose, -10),
            (Stage::ReadbackOverheadJoinClearance, join_pose, -9),
            (Stage::ReportAerodromeInSight, join_pose, -9),
            (Stage::ContactTower, join_pose, -8),
            (Stage::ReportStatus, join_pose, -8),
            (Stage::ReadbackLandingInformation, join_pose, -7),
            (Stage::ReportDescending, circuit_pose, -7),
            (Stage::WilcoReportDownwind, circuit_pose, -6),
            (Stage::ReportDownwind, circuit_pose, -6),
            (Stage::WilcoFollowTraffic, circuit_pose, -5),
            (Stage::ReportFinal, final_pose, -4),
            (Stage::ReadbackContinueApproach, final_pose, -3),
            (Stage::ReadbackLandingClearance, final_pose, -3),
            (Stage::ReadbackVacateRunwayRequest, on_runway_pose, -2),
            (Stage::ReportVacatedRunway, vacated_pose, 5),
            (Stage::ReadbackTaxiInformation, parked_pose, 5),
        ]
    } else {
        vec![
            (Stage::RequestJoin, join_pose, -10),
            (Stage::ReportDetails, join_pose, -10),
            (Stage::ReportCrosswindJoin, circuit_pose, -9),
            (Stage::ReportDownwind, circuit_pose, -6),
            (Stage::ReportFinal, final_pose, -4),
            (Stage::ReadbackContinueApproach, final_pose, -3),
            (Stage::ReportVacatedRunway, vacated_pose, 5),
            (Stage::ReportTaxiing, parked_pose, 5),
        ]
    };

    let next_waypoint_index = waypoints.len() - 1;
    let points = sequence
        .into_iter()
        .enumerate()
        .map(|(offset_index, (stage, pose, offset))| ScenarioPoint {
            index: start_index + offset_index,
            stage,
            pose,
            update_data: contacted.clone(),
            next_waypoint_index,
            time_at_point: landing_time + offset,
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_time_minutes() {
        let config = GenerationConfig::default();
        assert_eq!(flight_time_minutes(0.0, &config), 0);

        // 125 kt over 125 NM is an hour, padded by the multiplier
        let t = flight_time_minutes(125.0 * NAUTICAL_MILE_METRES, &config);
        assert_eq!(t, 78);
    }

    #[test]
    fn test_flight_time_monotonic_in_distance() {
        let config = GenerationConfig::default();
        let mut last = 0;
        for km in [0, 5, 20, 50, 100, 250] {
            let t = flight_time_minutes(km as f64 * 1000.0, &config);
            assert!(t >= last);
            last = t;
        }
    }
}
