use serde::{Deserialize, Serialize};

/// Metres per nautical mile.
pub const NAUTICAL_MILE_METRES: f64 = 1852.0;

/// Tuning knobs for scenario generation. Everything here is deterministic
/// input: two generations with the same seed and config are identical.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Maximum runway-to-runway separation between start and end aerodrome.
    pub max_aerodrome_distance: f64,
    /// Maximum total airborne route distance, including the leg required to
    /// reach the end aerodrome from the last waypoint.
    pub max_route_distance: f64,
    /// Hard cap on en-route waypoints regardless of the requested count.
    pub max_airborne_waypoints: usize,
    /// Independent routing attempts before giving up on a seed.
    pub route_attempt_budget: usize,
    /// Average cruise speed used for elapsed-time estimates.
    pub average_speed_knots: f64,
    /// Pads flight-time estimates for wind and manoeuvring.
    pub flight_time_multiplier: f64,
    pub cruise_altitude: f64,
    pub cruise_airspeed: f64,
    pub climb_out_altitude: f64,
    pub climb_out_airspeed: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_aerodrome_distance: 100_000.0, // 100 km
            max_route_distance: 300_000.0,
            max_airborne_waypoints: 5,
            route_attempt_budget: 1000,
            average_speed_knots: 125.0,
            flight_time_multiplier: 1.3,
            cruise_altitude: 2000.0,
            cruise_airspeed: 130.0,
            climb_out_altitude: 1200.0,
            climb_out_airspeed: 70.0,
        }
    }
}

/// The trainee's aircraft, as shown on the kneeboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDetails {
    pub prefix: String,
    pub callsign: String,
    pub aircraft_type: String,
}

impl Default for AircraftDetails {
    fn default() -> Self {
        Self {
            prefix: "STUDENT".to_string(),
            callsign: "G-OFLY".to_string(),
            aircraft_type: "Cessna 172".to_string(),
        }
    }
}
