use rt_trainer_rust::data::{
    Aerodrome, AerodromeClass, Airspace, FrequencyType, MetorData, ParkingPoint, RadioFrequency,
    ReferenceData, Runway, Waypoint,
};
use rt_trainer_rust::utils::navigation::Coord;

fn metor() -> MetorData {
    MetorData {
        avg_wind_direction: 240.0,
        mean_wind_speed: 8.0,
        std_wind_speed: 3.0,
        mean_pressure: 1013.0,
        std_pressure: 5.0,
        mean_temperature: 11.0,
        std_temperature: 4.0,
    }
}

fn aerodrome(
    name: &str,
    icao: &str,
    class: AerodromeClass,
    location: Coord,
    runway_heading: f64,
) -> Aerodrome {
    let frequencies = match class {
        AerodromeClass::Controlled => vec![
            RadioFrequency {
                frequency_type: FrequencyType::Ground,
                frequency: "121.900".to_string(),
                callsign: format!("{} Ground", name),
            },
            RadioFrequency {
                frequency_type: FrequencyType::Tower,
                frequency: "124.000".to_string(),
                callsign: format!("{} Tower", name),
            },
        ],
        AerodromeClass::Uncontrolled => vec![RadioFrequency {
            frequency_type: FrequencyType::Information,
            frequency: "118.430".to_string(),
            callsign: format!("{} Information", name),
        }],
    };

    Aerodrome {
        name: name.to_string(),
        icao: icao.to_string(),
        class,
        location,
        elevation: 300.0,
        runways: vec![Runway {
            designator: "27".to_string(),
            threshold: Coord::new(location.lat + 0.001, location.long + 0.004),
            true_heading: runway_heading,
            magnetic_heading: runway_heading - 2.0,
            length_metres: 1000.0,
        }],
        parking_points: vec![ParkingPoint {
            position: Coord::new(location.lat + 0.0015, location.long + 0.002),
            heading: 90.0,
        }],
        holding_point: Coord::new(location.lat + 0.0008, location.long + 0.0035),
        frequencies,
        metor_data: metor(),
    }
}

fn atz(name: &str, location: Coord) -> Airspace {
    Airspace {
        name: format!("{} ATZ", name),
        boundary: vec![
            Coord::new(location.lat - 0.04, location.long - 0.04),
            Coord::new(location.lat - 0.04, location.long + 0.04),
            Coord::new(location.lat + 0.04, location.long + 0.04),
            Coord::new(location.lat + 0.04, location.long - 0.04),
        ],
    }
}

/// A small self-consistent catalog set: two controlled and two uncontrolled
/// aerodromes around a central CTA that every en-route waypoint sits inside,
/// so every generated route crosses the CTA boundary exactly twice.
pub fn reference_data() -> ReferenceData {
    let alderton = Coord::new(52.00, -1.00);
    let oakham = Coord::new(52.31, -0.38);
    let draycott = Coord::new(52.20, -1.10);
    let felton = Coord::new(51.90, -0.50);

    let airspaces = vec![
        Airspace {
            name: "Midland CTA".to_string(),
            boundary: vec![
                Coord::new(52.02, -0.99),
                Coord::new(52.02, -0.45),
                Coord::new(52.28, -0.45),
                Coord::new(52.28, -0.99),
            ],
        },
        atz("Alderton", alderton),
        atz("Oakham", oakham),
        atz("Draycott", draycott),
        atz("Felton", felton),
    ];

    ReferenceData::from_parts(
        vec![
            aerodrome("Alderton", "EGXA", AerodromeClass::Controlled, alderton, 270.0),
            aerodrome("Oakham", "EGXB", AerodromeClass::Controlled, oakham, 88.0),
        ],
        vec![
            aerodrome("Draycott", "EGXC", AerodromeClass::Uncontrolled, draycott, 240.0),
            aerodrome("Felton", "EGXD", AerodromeClass::Uncontrolled, felton, 220.0),
        ],
        vec![
            Waypoint::nav_aid("DTY", Coord::new(52.10, -0.90)),
            Waypoint::nav_aid("HON", Coord::new(52.15, -0.70)),
            Waypoint::nav_aid("OLNEY", Coord::new(52.05, -0.60)),
            Waypoint::nav_aid("ASHBY", Coord::new(52.22, -0.62)),
            Waypoint::nav_aid("SILVERSTONE", Coord::new(52.07, -0.95)),
            Waypoint::nav_aid("PITSFORD", Coord::new(52.25, -0.85)),
        ],
        airspaces,
    )
    .expect("fixture catalogs should validate")
}
