mod emergency;
mod error;
mod points;
mod router;
mod seed;
mod selection;
mod stages;
mod weather;

pub use emergency::inject_emergency;
pub use error::GenerationError;
pub use points::{
    airborne_points, end_aerodrome_points, flight_time_minutes, start_aerodrome_points, Pose,
    ScenarioPoint, SimUpdateData,
};
pub use router::{find_airspace_crossings, route_waypoints, Crossing};
pub use seed::{hash_string, seeded_normal, split_seed, Seed};
pub use selection::{select_end_aerodrome, select_start_aerodrome};
pub use stages::{EmergencyType, Phase, Stage};
pub use weather::{sample as sample_weather, MetorSample};
