/// Seed-driven choice of departure and arrival aerodromes.
use tracing::debug;

use crate::config::GenerationConfig;
use crate::data::{Aerodrome, ReferenceData};
use crate::engine::error::GenerationError;
use crate::engine::seed::Seed;
use crate::utils::navigation::haversine_distance;

/// Parity of the scenario seed picks the departure catalog: even seeds leave
/// from a controlled aerodrome, odd seeds from an uncontrolled one.
pub fn select_start_aerodrome<'a>(
    seed: &Seed,
    data: &'a ReferenceData,
) -> Result<&'a Aerodrome, GenerationError> {
    let controlled = seed.scenario_seed % 2 == 0;
    let catalog = data.aerodromes(controlled);
    if catalog.is_empty() {
        return Err(GenerationError::EmptyCatalog("aerodromes"));
    }

    let aerodrome = &catalog[seed.scenario_seed as usize % catalog.len()];
    debug!("Start aerodrome: {} ({})", aerodrome.name, aerodrome.icao);
    Ok(aerodrome)
}

/// Searches the catalog opposite the start aerodrome's for the first
/// candidate within the maximum separation, measured runway threshold to
/// runway threshold. Exhausting the catalog is fatal: the scenario is
/// meaningless without a reachable destination.
pub fn select_end_aerodrome<'a>(
    seed: &Seed,
    start: &Aerodrome,
    data: &'a ReferenceData,
    config: &GenerationConfig,
) -> Result<&'a Aerodrome, GenerationError> {
    let catalog = data.aerodromes(!start.is_controlled());
    if catalog.is_empty() {
        return Err(GenerationError::EmptyCatalog("aerodromes"));
    }

    let departure_threshold = start.takeoff_runway(seed.scenario_seed).threshold;

    for i in 0..catalog.len() {
        let candidate = &catalog[(seed.scenario_seed as usize + i) % catalog.len()];
        let arrival_threshold = candidate.landing_runway(seed.scenario_seed).threshold;
        let distance = haversine_distance(departure_threshold, arrival_threshold);

        if distance <= config.max_aerodrome_distance {
            debug!(
                "End aerodrome: {} ({}), {:.1} km out",
                candidate.name,
                candidate.icao,
                distance / 1000.0
            );
            return Ok(candidate);
        }
    }

    Err(GenerationError::NoReachableEndAerodrome {
        start: start.name.clone(),
        max_distance_metres: config.max_aerodrome_distance,
    })
}
