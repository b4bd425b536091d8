/// Deterministic METOR weather sampling.
///
/// The weather sub-seed drives a seasonal temperature factor and one
/// seeded-normal draw per variable, so the same seed always briefs the same
/// weather. Each variable salts the seed text to keep the draws independent.
use serde::{Deserialize, Serialize};

use crate::data::MetorData;
use crate::engine::seed::{seeded_normal, Seed};

/// One sampled weather briefing for an aerodrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetorSample {
    pub wind_direction: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub dewpoint: f64,
}

pub fn sample(seed: &Seed, metor: &MetorData) -> MetorSample {
    // Season follows the weather seed: spring, summer, autumn, winter
    let mean_temperature = match seed.weather_seed % 4 {
        0 => metor.mean_temperature * 1.3,
        1 => metor.mean_temperature * 1.7,
        2 => metor.mean_temperature * 1.1,
        _ => metor.mean_temperature * 0.4,
    };

    let salt = |variable: &str| format!("{}-{}", seed.weather_seed, variable);

    let wind_direction =
        seeded_normal(&salt("wind-direction"), metor.avg_wind_direction, 10.0).rem_euclid(360.0);
    let wind_speed =
        seeded_normal(&salt("wind-speed"), metor.mean_wind_speed, metor.std_wind_speed).max(0.0);
    let pressure = seeded_normal(&salt("pressure"), metor.mean_pressure, metor.std_pressure);
    let temperature =
        seeded_normal(&salt("temperature"), mean_temperature, metor.std_temperature);

    MetorSample {
        wind_direction,
        wind_speed,
        pressure,
        temperature,
        // Basic dewpoint approximation, not from any real formula
        dewpoint: temperature * 0.95 - 1.2,
    }
}
