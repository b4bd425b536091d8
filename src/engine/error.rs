use thiserror::Error;

/// Unrecoverable generation failures. None of these are retryable with the
/// same input: identical seed and catalogs fail identically, so callers must
/// regenerate with a different seed or parameters.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("reference catalog is empty: {0}")]
    EmptyCatalog(&'static str),

    #[error("no end aerodrome within {max_distance_metres:.0} m of {start}")]
    NoReachableEndAerodrome { start: String, max_distance_metres: f64 },

    #[error("no valid waypoint route found within {attempts} attempts")]
    RouteExhausted { attempts: usize },

    #[error("no departure airspace found for {airport}")]
    MissingDepartureAirspace { airport: String },

    #[error("aerodrome {airport} has no {role} frequency")]
    MissingFrequency { airport: String, role: &'static str },
}
