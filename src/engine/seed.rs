/// Deterministic seed derivation.
///
/// Every pseudo-random choice in the engine routes through the values here:
/// the seed string is hashed once, the hash is split into a scenario sub-seed
/// and a weather sub-seed, and all downstream selection is modular arithmetic
/// on those. Same seed string, same scenario.
use serde::{Deserialize, Serialize};

/// A scenario seed: the user-supplied string plus its derived sub-seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub seed_string: String,
    pub scenario_seed: u32,
    pub weather_seed: u32,
}

impl Seed {
    pub fn new(text: &str) -> Self {
        let (scenario_seed, weather_seed) = split_seed(hash_string(text));
        Self {
            seed_string: text.to_string(),
            scenario_seed,
            weather_seed,
        }
    }
}

/// Polynomial base-31 string hash with wrapping 32-bit arithmetic.
/// The empty string hashes to 0, which is defined rather than an error.
pub fn hash_string(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    hash.unsigned_abs()
}

/// Splits the decimal digits of `n` into two equal-length halves, padding
/// with zeros, to get two independent draws out of one hash.
pub fn split_seed(n: u32) -> (u32, u32) {
    let digits = n.to_string();
    let half = digits.len().div_ceil(2);

    let first: u32 = digits[..half].parse().unwrap_or(0);
    let mut second = digits[half..].to_string();
    while second.len() < half {
        second.push('0');
    }
    let second: u32 = second.parse().unwrap_or(0);

    (first, second)
}

/// Deterministic sample from a normal distribution via the Box-Muller
/// transform, with both uniforms derived from the seed text. Not
/// statistically rigorous; the point is repeatability, not randomness.
pub fn seeded_normal(seed_text: &str, mean: f64, std_dev: f64) -> f64 {
    let (v1, v2) = split_seed(hash_string(seed_text));
    let u1 = 1.0 / f64::from(v1.max(1));
    let u2 = 1.0 / f64::from(v2.max(1));

    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

    z0 * std_dev + mean
}
