use serde::{Deserialize, Serialize};

use crate::utils::navigation::{destination_point, Coord};

/// Whether an aerodrome has an active air traffic control service. The tag
/// decides which stage sequence and which radio targets a scenario uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AerodromeClass {
    Controlled,
    Uncontrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrequencyType {
    Ground,
    Tower,
    Information,
}

/// One published radio frequency, e.g. "121.930" / "Bristol Ground".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioFrequency {
    pub frequency_type: FrequencyType,
    pub frequency: String,
    pub callsign: String,
}

/// A stand or apron position with the parked aircraft's heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingPoint {
    pub position: Coord,
    pub heading: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runway {
    pub designator: String,
    pub threshold: Coord,
    pub true_heading: f64,
    pub magnetic_heading: f64,
    pub length_metres: f64,
}

impl Runway {
    /// Position at a signed multiple of the runway length from the threshold,
    /// along the runway's true heading. Negative multiples sit before the
    /// threshold (approach legs), values above 1 past the far end (climb-out).
    pub fn point_along_vector(&self, fraction: f64) -> Coord {
        destination_point(self.threshold, self.true_heading, self.length_metres * fraction)
    }
}

/// Long-term weather model for an aerodrome, sampled per scenario seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetorData {
    pub avg_wind_direction: f64,
    pub mean_wind_speed: f64,
    pub std_wind_speed: f64,
    pub mean_pressure: f64,
    pub std_pressure: f64,
    pub mean_temperature: f64,
    pub std_temperature: f64,
}

/// A reference-data aerodrome. Read-only as far as the engine is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aerodrome {
    pub name: String,
    pub icao: String,
    pub class: AerodromeClass,
    pub location: Coord,
    pub elevation: f64,
    pub runways: Vec<Runway>,
    pub parking_points: Vec<ParkingPoint>,
    pub holding_point: Coord,
    pub frequencies: Vec<RadioFrequency>,
    pub metor_data: MetorData,
}

impl Aerodrome {
    pub fn is_controlled(&self) -> bool {
        self.class == AerodromeClass::Controlled
    }

    /// The name ATC units are addressed by, e.g. "Bristol" for
    /// "Bristol Lulsgate".
    pub fn short_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(self.name.as_str())
    }

    pub fn frequency(&self, frequency_type: FrequencyType) -> Option<&RadioFrequency> {
        self.frequencies.iter().find(|f| f.frequency_type == frequency_type)
    }

    /// The frequency worked while parked: ground for a controlled aerodrome,
    /// the information service otherwise.
    pub fn parked_frequency(&self) -> Option<&RadioFrequency> {
        match self.class {
            AerodromeClass::Controlled => self
                .frequency(FrequencyType::Ground)
                .or_else(|| self.frequency(FrequencyType::Tower)),
            AerodromeClass::Uncontrolled => self
                .frequency(FrequencyType::Information)
                .or_else(|| self.frequency(FrequencyType::Tower)),
        }
    }

    /// The frequency worked on arrival: tower for a controlled aerodrome,
    /// the information service otherwise.
    pub fn arrival_frequency(&self) -> Option<&RadioFrequency> {
        match self.class {
            AerodromeClass::Controlled => self
                .frequency(FrequencyType::Tower)
                .or_else(|| self.frequency(FrequencyType::Ground)),
            AerodromeClass::Uncontrolled => self
                .frequency(FrequencyType::Information)
                .or_else(|| self.frequency(FrequencyType::Tower)),
        }
    }

    pub fn takeoff_runway(&self, scenario_seed: u32) -> &Runway {
        &self.runways[scenario_seed as usize % self.runways.len()]
    }

    pub fn landing_runway(&self, scenario_seed: u32) -> &Runway {
        &self.runways[scenario_seed as usize % self.runways.len()]
    }

    pub fn parking_point(&self, scenario_seed: u32) -> &ParkingPoint {
        &self.parking_points[scenario_seed as usize % self.parking_points.len()]
    }

    /// Deterministic scenario start time in minutes since midnight, somewhere
    /// in a 06:00-18:00 departure window.
    pub fn start_time(&self, scenario_seed: u32) -> i64 {
        360 + i64::from(scenario_seed % 720)
    }

    pub fn point_along_takeoff_runway(&self, scenario_seed: u32, fraction: f64) -> Coord {
        self.takeoff_runway(scenario_seed).point_along_vector(fraction)
    }

    pub fn point_along_landing_runway(&self, scenario_seed: u32, fraction: f64) -> Coord {
        self.landing_runway(scenario_seed).point_along_vector(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::navigation::haversine_distance;

    fn runway() -> Runway {
        Runway {
            designator: "27".to_string(),
            threshold: Coord::new(51.3827, -2.7191),
            true_heading: 272.0,
            magnetic_heading: 270.0,
            length_metres: 2011.0,
        }
    }

    #[test]
    fn test_point_along_vector() {
        let rwy = runway();

        let at_threshold = rwy.point_along_vector(0.0);
        assert!(haversine_distance(rwy.threshold, at_threshold) < 1.0);

        let far_end = rwy.point_along_vector(1.0);
        assert!((haversine_distance(rwy.threshold, far_end) - 2011.0).abs() < 1.0);

        let long_final = rwy.point_along_vector(-4.5);
        assert!((haversine_distance(rwy.threshold, long_final) - 4.5 * 2011.0).abs() < 5.0);
    }

    #[test]
    fn test_start_time_window() {
        let rwy = runway();
        let aerodrome = Aerodrome {
            name: "Bristol Lulsgate".to_string(),
            icao: "EGGD".to_string(),
            class: AerodromeClass::Controlled,
            location: Coord::new(51.3827, -2.7191),
            elevation: 622.0,
            runways: vec![rwy],
            parking_points: vec![ParkingPoint {
                position: Coord::new(51.3835, -2.7155),
                heading: 90.0,
            }],
            holding_point: Coord::new(51.3830, -2.7170),
            frequencies: vec![],
            metor_data: MetorData {
                avg_wind_direction: 240.0,
                mean_wind_speed: 8.0,
                std_wind_speed: 3.0,
                mean_pressure: 1013.0,
                std_pressure: 5.0,
                mean_temperature: 11.0,
                std_temperature: 4.0,
            },
        };

        for seed in [0u32, 1, 719, 720, 123_456] {
            let t = aerodrome.start_time(seed);
            assert!((360..1080).contains(&t));
        }
        assert_eq!(aerodrome.short_name(), "Bristol");
    }
}
