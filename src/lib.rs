//! Deterministic radio-telephony training scenario generation.
//!
//! Given a seed string and read-only aeronautical reference data, the engine
//! produces the ordered list of scenario points a trainee works through:
//! start-up, taxi, take-off, climb-out, en-route frequency changes (with an
//! optional scripted emergency), approach, landing and taxi to parking. The
//! same seed always reproduces the same scenario.

pub mod config;
pub mod data;
pub mod engine;
pub mod scenario;
pub mod utils;
