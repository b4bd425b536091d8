use serde::{Deserialize, Serialize};

use crate::utils::navigation::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaypointKind {
    Aerodrome,
    NavAid,
}

/// A named routing point. Aerodrome-kind waypoints anchor the two ends of a
/// route; nav-aid waypoints come from the en-route catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub name: String,
    pub kind: WaypointKind,
    pub location: Coord,
}

impl Waypoint {
    pub fn nav_aid(name: &str, location: Coord) -> Self {
        Self {
            name: name.to_string(),
            kind: WaypointKind::NavAid,
            location,
        }
    }

    pub fn aerodrome(name: &str, location: Coord) -> Self {
        Self {
            name: name.to_string(),
            kind: WaypointKind::Aerodrome,
            location,
        }
    }
}
