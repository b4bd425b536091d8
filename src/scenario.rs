use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GenerationConfig;
use crate::data::{Aerodrome, ReferenceData, Waypoint};
use crate::engine::{
    airborne_points, end_aerodrome_points, find_airspace_crossings, inject_emergency,
    route_waypoints, sample_weather, select_end_aerodrome, select_start_aerodrome,
    start_aerodrome_points, EmergencyType, GenerationError, MetorSample, Phase, ScenarioPoint,
    Seed, Stage,
};

/// What the caller asks for: a seed, how many en-route waypoints, and whether
/// to script an emergency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    pub seed: Seed,
    pub airborne_waypoints: usize,
    pub has_emergency: bool,
}

/// A generated scenario: the full ordered point script plus the route and
/// weather context it was built from. This is the engine's only artifact;
/// formatting, persistence and display belong to the consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub seed: Seed,
    pub start_aerodrome: Aerodrome,
    pub end_aerodrome: Aerodrome,
    pub waypoints: Vec<Waypoint>,
    pub points: Vec<ScenarioPoint>,
    pub departure_weather: MetorSample,
    pub arrival_weather: MetorSample,
}

impl Scenario {
    /// Generates the full scenario for the given parameters. Pure and
    /// deterministic: the same parameters and catalogs produce an identical
    /// scenario, and any unmet precondition fails loudly rather than
    /// returning a truncated script.
    pub fn generate(
        params: &GenerationParameters,
        data: &ReferenceData,
        config: &GenerationConfig,
    ) -> Result<Self, GenerationError> {
        let seed = &params.seed;

        let start = select_start_aerodrome(seed, data)?;
        let end = select_end_aerodrome(seed, start, data, config)?;

        let departure_threshold = start.takeoff_runway(seed.scenario_seed).threshold;
        let arrival_threshold = end.landing_runway(seed.scenario_seed).threshold;
        let enroute = route_waypoints(
            seed,
            params.airborne_waypoints,
            departure_threshold,
            arrival_threshold,
            data,
            config,
        )?;

        let mut waypoints = Vec::with_capacity(enroute.len() + 2);
        waypoints.push(Waypoint::aerodrome(&start.name, start.location));
        waypoints.extend(enroute);
        waypoints.push(Waypoint::aerodrome(&end.name, end.location));

        let crossings = find_airspace_crossings(
            &waypoints,
            data.airspaces(),
            &[start.name.as_str(), end.name.as_str()],
        );

        let mut points =
            start_aerodrome_points(seed, start, &waypoints, data.airspaces(), config)?;
        let mut next_index = points.len();

        let last_departure = points[points.len() - 1].clone();
        let airborne = airborne_points(next_index, &crossings, &last_departure, config);
        next_index += airborne.len();

        let airborne = if params.has_emergency {
            let (airborne, advanced) = inject_emergency(airborne, next_index, seed, &waypoints);
            next_index = advanced;
            airborne
        } else {
            airborne
        };
        points.extend(airborne);

        let last_airborne = points[points.len() - 1].clone();
        points.extend(end_aerodrome_points(
            next_index,
            seed,
            end,
            &waypoints,
            &last_airborne,
            config,
        )?);

        let scenario = Self {
            seed: seed.clone(),
            start_aerodrome: start.clone(),
            end_aerodrome: end.clone(),
            waypoints,
            departure_weather: sample_weather(seed, &start.metor_data),
            arrival_weather: sample_weather(seed, &end.metor_data),
            points,
        };

        info!(
            "Generated scenario '{}': {} -> {}, {} points",
            seed.seed_string,
            scenario.start_aerodrome.icao,
            scenario.end_aerodrome.icao,
            scenario.points.len()
        );

        Ok(scenario)
    }

    pub fn points(&self) -> &[ScenarioPoint] {
        &self.points
    }

    pub fn start_point(&self) -> &ScenarioPoint {
        &self.points[0]
    }

    pub fn end_point(&self) -> &ScenarioPoint {
        &self.points[self.points.len() - 1]
    }

    /// The emergency scripted into this scenario, if any.
    pub fn emergency(&self) -> Option<EmergencyType> {
        self.points
            .iter()
            .find(|p| p.update_data.emergency != EmergencyType::None)
            .map(|p| p.update_data.emergency)
    }

    pub fn statistics(&self) -> ScenarioStats {
        let phase_count = |phase: Phase| {
            self.points
                .iter()
                .filter(|p| p.stage.phase() == phase)
                .count()
        };

        ScenarioStats {
            seed_string: self.seed.seed_string.clone(),
            start_aerodrome: self.start_aerodrome.name.clone(),
            end_aerodrome: self.end_aerodrome.name.clone(),
            total_points: self.points.len(),
            waypoints: self.waypoints.len(),
            frequency_change_groups: self
                .points
                .iter()
                .filter(|p| p.stage == Stage::RequestFrequencyChange)
                .count(),
            departure_points: phase_count(Phase::StartUp)
                + phase_count(Phase::Taxi)
                + phase_count(Phase::TakeOff)
                + phase_count(Phase::ClimbOut),
            arrival_points: phase_count(Phase::Approach) + phase_count(Phase::Landing),
            emergency: self.emergency(),
            duration_minutes: self.end_point().time_at_point - self.start_point().time_at_point,
        }
    }
}

/// Summary of a generated scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioStats {
    pub seed_string: String,
    pub start_aerodrome: String,
    pub end_aerodrome: String,
    pub total_points: usize,
    pub waypoints: usize,
    pub frequency_change_groups: usize,
    pub departure_points: usize,
    pub arrival_points: usize,
    pub emergency: Option<EmergencyType>,
    pub duration_minutes: i64,
}

impl std::fmt::Display for ScenarioStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scenario '{}'", self.seed_string)?;
        writeln!(f, "  Route: {} -> {}", self.start_aerodrome, self.end_aerodrome)?;
        writeln!(f, "  Points: {} ({} waypoints)", self.total_points, self.waypoints)?;
        writeln!(f, "  Departure/arrival points: {}/{}", self.departure_points, self.arrival_points)?;
        writeln!(f, "  Frequency changes: {}", self.frequency_change_groups)?;
        match self.emergency {
            Some(kind) => writeln!(f, "  Emergency: {}", kind)?,
            None => writeln!(f, "  Emergency: none")?,
        }
        writeln!(f, "  Duration: {} minutes", self.duration_minutes)?;
        Ok(())
    }
}
