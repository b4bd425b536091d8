use serde::{Deserialize, Serialize};

use crate::utils::navigation::{first_boundary_crossing, Coord};

/// A controlled-airspace volume. The engine only cares about the horizontal
/// boundary polygon: crossing it is what triggers a frequency-change group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airspace {
    pub name: String,
    pub boundary: Vec<Coord>,
}

impl Airspace {
    /// The first point where segment a->b crosses this airspace's boundary,
    /// with the parameter along a->b, or None if the track never crosses it.
    pub fn first_crossing(&self, a: Coord, b: Coord) -> Option<(f64, Coord)> {
        first_boundary_crossing(a, b, &self.boundary)
    }
}
