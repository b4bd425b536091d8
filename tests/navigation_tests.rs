use rt_trainer_rust::utils::navigation::{
    bearing_between, destination_point, haversine_distance, Coord,
};

#[test]
fn test_runway_vector_geometry() {
    // A point projected down a 272-degree runway heading lands the right
    // distance away and roughly west of the threshold
    let threshold = Coord::new(51.3825, -2.7044);
    let far_end = destination_point(threshold, 272.0, 2011.0);

    let dist = haversine_distance(threshold, far_end);
    assert!((dist - 2011.0).abs() < 1.0);

    let bearing = bearing_between(threshold, far_end);
    assert!((bearing - 272.0).abs() < 0.5);

    // Walking backwards lands the same distance on the reciprocal side
    let long_final = destination_point(threshold, 272.0, -4.5 * 2011.0);
    let back_bearing = bearing_between(threshold, long_final);
    assert!((back_bearing - 92.0).abs() < 1.0);
}

#[test]
fn test_known_aerodrome_distances() {
    let bristol = Coord::new(51.3827, -2.7191);
    let kemble = Coord::new(51.6681, -2.0569);
    let cardiff = Coord::new(51.3967, -3.3433);

    // Bristol-Kemble is a short hop, well inside the 100 km scenario bound
    let to_kemble = haversine_distance(bristol, kemble);
    assert!(to_kemble > 40_000.0 && to_kemble < 70_000.0);

    // Bristol-Cardiff crosses the Severn, still inside the bound
    let to_cardiff = haversine_distance(bristol, cardiff);
    assert!(to_cardiff > 30_000.0 && to_cardiff < 60_000.0);
}
