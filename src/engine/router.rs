/// En-route waypoint chaining and airspace-boundary crossing detection.
use tracing::debug;

use crate::config::GenerationConfig;
use crate::data::{Airspace, ReferenceData, Waypoint};
use crate::engine::error::GenerationError;
use crate::engine::seed::Seed;
use crate::utils::navigation::{haversine_distance, Coord};

/// Where the planned track crosses an airspace boundary. Each crossing
/// triggers one frequency-change stage group, tagged with the index of the
/// waypoint the aircraft is tracking at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossing {
    pub position: Coord,
    pub airspace: String,
    pub next_waypoint_index: usize,
}

/// Selects an ordered chain of en-route waypoints under a bounded search.
///
/// The requested count is clamped to the configured cap. Each attempt builds
/// a candidate chain from the departure runway, picking slot `j` of attempt
/// `i` as `catalog[(seed * j * (i+1)) % len]` and accepting the candidate
/// only while the running distance plus the leg still needed to reach the
/// arrival runway stays inside the route budget. A chain that cannot grow is
/// abandoned; the `i+1` stride perturbation gives the next attempt diversity
/// without true randomness. Exhausting the attempt budget is fatal.
pub fn route_waypoints(
    seed: &Seed,
    requested: usize,
    departure: Coord,
    arrival: Coord,
    data: &ReferenceData,
    config: &GenerationConfig,
) -> Result<Vec<Waypoint>, GenerationError> {
    let catalog = data.waypoints();
    if catalog.is_empty() {
        return Err(GenerationError::EmptyCatalog("waypoints"));
    }

    let requested = requested.clamp(1, config.max_airborne_waypoints);
    let len = catalog.len() as u64;

    for attempt in 0..config.route_attempt_budget {
        let mut chain: Vec<Waypoint> = Vec::with_capacity(requested);
        let mut position = departure;
        let mut total_distance = 0.0;

        for slot in 1..=requested {
            let index =
                (u64::from(seed.scenario_seed) * slot as u64 * (attempt as u64 + 1)) % len;
            let candidate = &catalog[index as usize];

            let leg = haversine_distance(position, candidate.location);
            let remaining = haversine_distance(candidate.location, arrival);
            if total_distance + leg + remaining > config.max_route_distance {
                break;
            }

            total_distance += leg;
            position = candidate.location;
            chain.push(candidate.clone());
        }

        if chain.len() >= requested {
            debug!(
                "Routed {} waypoints in attempt {}, {:.1} km airborne",
                chain.len(),
                attempt,
                total_distance / 1000.0
            );
            return Ok(chain);
        }
    }

    Err(GenerationError::RouteExhausted {
        attempts: config.route_attempt_budget,
    })
}

/// Finds the earliest boundary crossing of every waypoint-to-waypoint segment
/// with any airspace not named for an excluded aerodrome. The departure and
/// arrival aerodromes' own zones are excluded because those boundaries are
/// already scripted by the departure and arrival phases.
pub fn find_airspace_crossings(
    route: &[Waypoint],
    airspaces: &[Airspace],
    excluded_names: &[&str],
) -> Vec<Crossing> {
    let mut crossings = Vec::new();

    for segment in 0..route.len().saturating_sub(1) {
        let from = route[segment].location;
        let to = route[segment + 1].location;

        let mut best: Option<(f64, Crossing)> = None;
        for airspace in airspaces {
            if excluded_names.iter().any(|name| airspace.name.contains(name)) {
                continue;
            }
            if let Some((t, position)) = airspace.first_crossing(from, to) {
                if best.as_ref().map_or(true, |(bt, _)| t < *bt) {
                    best = Some((
                        t,
                        Crossing {
                            position,
                            airspace: airspace.name.clone(),
                            next_waypoint_index: segment + 1,
                        },
                    ));
                }
            }
        }

        if let Some((_, crossing)) = best {
            crossings.push(crossing);
        }
    }

    crossings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Aerodrome, AerodromeClass, FrequencyType, MetorData, ParkingPoint, RadioFrequency, Runway};

    fn fixture_data() -> ReferenceData {
        let location = Coord::new(52.0, -1.0);
        let aerodrome = |name: &str, class: AerodromeClass| Aerodrome {
            name: name.to_string(),
            icao: format!("EG{}", &name[..2].to_uppercase()),
            class,
            location,
            elevation: 300.0,
            runways: vec![Runway {
                designator: "27".to_string(),
                threshold: location,
                true_heading: 270.0,
                magnetic_heading: 268.0,
                length_metres: 1000.0,
            }],
            parking_points: vec![ParkingPoint {
                position: location,
                heading: 90.0,
            }],
            holding_point: location,
            frequencies: vec![RadioFrequency {
                frequency_type: if class == AerodromeClass::Controlled {
                    FrequencyType::Ground
                } else {
                    FrequencyType::Information
                },
                frequency: "121.900".to_string(),
                callsign: format!("{} Radio", name),
            }],
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

        ReferenceData::from_parts(
            vec![aerodrome("Alderton", AerodromeClass::Controlled)],
            vec![aerodrome("Digby", AerodromeClass::Uncontrolled)],
            vec![
                Waypoint::nav_aid("DTY", Coord::new(52.10, -0.90)),
                Waypoint::nav_aid("HON", Coord::new(52.15, -0.70)),
                Waypoint::nav_aid("OLNEY", Coord::new(52.05, -0.60)),
                Waypoint::nav_aid("ASHBY", Coord::new(52.22, -0.62)),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_route_deterministic_and_clamped() {
        let data = fixture_data();
        let config = GenerationConfig::default();
        let seed = Seed::new("7");

        let departure = Coord::new(52.0, -1.0);
        let arrival = Coord::new(52.2, -1.1);

        let a = route_waypoints(&seed, 2, departure, arrival, &data, &config).unwrap();
        let b = route_waypoints(&seed, 2, departure, arrival, &data, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);

        let capped = route_waypoints(&seed, 50, departure, arrival, &data, &config).unwrap();
        assert_eq!(capped.len(), config.max_airborne_waypoints);
    }

    #[test]
    fn test_route_budget_exhaustion_is_fatal() {
        let data = fixture_data();
        let seed = Seed::new("7");
        let config = GenerationConfig {
            // Budget too small for any chain to fit
            max_route_distance: 1.0,
            ..GenerationConfig::default()
        };

        let result = route_waypoints(
            &seed,
            2,
            Coord::new(52.0, -1.0),
            Coord::new(52.2, -1.1),
            &data,
            &config,
        );
        assert!(matches!(result, Err(GenerationError::RouteExhausted { .. })));
    }

    #[test]
    fn test_crossings_tag_segment_end() {
        let airspace = Airspace {
            name: "Midland CTA".to_string(),
            boundary: vec![
                Coord::new(52.02, -0.99),
                Coord::new(52.02, -0.45),
                Coord::new(52.28, -0.45),
                Coord::new(52.28, -0.99),
            ],
        };
        let route = vec![
            Waypoint::aerodrome("Alderton", Coord::new(52.0, -1.0)),
            Waypoint::nav_aid("DTY", Coord::new(52.10, -0.90)),
            Waypoint::nav_aid("HON", Coord::new(52.15, -0.70)),
            Waypoint::aerodrome("Digby", Coord::new(52.2, -1.1)),
        ];

        let crossings = find_airspace_crossings(&route, &[airspace], &["Alderton", "Digby"]);

        // Entry on the first segment, exit on the last; the middle segment
        // stays inside the CTA.
        assert_eq!(crossings.len(), 2);
        assert_eq!(crossings[0].next_waypoint_index, 1);
        assert_eq!(crossings[1].next_waypoint_index, 3);
    }
}
