mod aerodrome;
mod airspace;
mod waypoint;

pub use aerodrome::{
    Aerodrome, AerodromeClass, FrequencyType, MetorData, ParkingPoint, RadioFrequency, Runway,
};
pub use airspace::Airspace;
pub use waypoint::{Waypoint, WaypointKind};

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// The read-only aeronautical catalogs the engine generates against.
/// Injected into generation rather than loaded globally, so tests can
/// substitute small fixture catalogs.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    controlled_aerodromes: Vec<Aerodrome>,
    uncontrolled_aerodromes: Vec<Aerodrome>,
    waypoints: Vec<Waypoint>,
    airspaces: Vec<Airspace>,
}

impl ReferenceData {
    /// Builds a catalog set directly from parts, validating it the same way
    /// as a load from disk.
    pub fn from_parts(
        controlled_aerodromes: Vec<Aerodrome>,
        uncontrolled_aerodromes: Vec<Aerodrome>,
        waypoints: Vec<Waypoint>,
        airspaces: Vec<Airspace>,
    ) -> Result<Self> {
        let data = Self {
            controlled_aerodromes,
            uncontrolled_aerodromes,
            waypoints,
            airspaces,
        };
        data.validate()?;
        Ok(data)
    }

    /// Loads the JSON catalogs from a data directory.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let dir = data_dir.as_ref();

        let controlled_aerodromes = load_json(&dir.join("controlled_aerodromes.json"))?;
        let uncontrolled_aerodromes = load_json(&dir.join("uncontrolled_aerodromes.json"))?;
        let waypoints = load_json(&dir.join("waypoints.json"))?;
        let airspaces = load_json(&dir.join("airspaces.json"))?;

        let data = Self {
            controlled_aerodromes,
            uncontrolled_aerodromes,
            waypoints,
            airspaces,
        };
        data.validate()?;

        info!(
            "Loaded reference data: {} controlled / {} uncontrolled aerodromes, {} waypoints, {} airspaces",
            data.controlled_aerodromes.len(),
            data.uncontrolled_aerodromes.len(),
            data.waypoints.len(),
            data.airspaces.len()
        );

        Ok(data)
    }

    pub fn aerodromes(&self, controlled: bool) -> &[Aerodrome] {
        if controlled {
            &self.controlled_aerodromes
        } else {
            &self.uncontrolled_aerodromes
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn airspaces(&self) -> &[Airspace] {
        &self.airspaces
    }

    /// The catalogs must be usable by every generator before generation
    /// starts, so a scenario never fails halfway through on missing fields.
    fn validate(&self) -> Result<()> {
        if self.controlled_aerodromes.is_empty() {
            bail!("controlled aerodrome catalog is empty");
        }
        if self.uncontrolled_aerodromes.is_empty() {
            bail!("uncontrolled aerodrome catalog is empty");
        }
        if self.waypoints.is_empty() {
            bail!("waypoint catalog is empty");
        }

        for aerodrome in self
            .controlled_aerodromes
            .iter()
            .chain(self.uncontrolled_aerodromes.iter())
        {
            if aerodrome.runways.is_empty() {
                bail!("aerodrome {} has no runways", aerodrome.icao);
            }
            if aerodrome.parking_points.is_empty() {
                bail!("aerodrome {} has no parking points", aerodrome.icao);
            }
            if aerodrome.parked_frequency().is_none() {
                bail!("aerodrome {} has no usable parked frequency", aerodrome.icao);
            }
            if aerodrome.arrival_frequency().is_none() {
                bail!("aerodrome {} has no usable arrival frequency", aerodrome.icao);
            }
        }

        for airspace in &self.airspaces {
            if airspace.boundary.len() < 3 {
                bail!("airspace {} boundary is not a polygon", airspace.name);
            }
        }

        Ok(())
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference data: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse reference data JSON: {}", path.display()))
}
