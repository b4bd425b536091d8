/// Great-circle navigation and geometry helpers
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub long: f64,
}

impl Coord {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Distance between two coordinates in metres (haversine).
pub fn haversine_distance(from: Coord, to: Coord) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dlambda = (to.long - from.long).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Initial great-circle bearing from one coordinate to another, in degrees
/// normalized to [0, 360).
pub fn bearing_between(from: Coord, to: Coord) -> f64 {
    let dlambda = (to.long - from.long).to_radians();
    let y = dlambda.sin() * to.lat.to_radians().cos();
    let x = from.lat.to_radians().cos() * to.lat.to_radians().sin()
        - from.lat.to_radians().sin() * to.lat.to_radians().cos() * dlambda.cos();

    let bearing = y.atan2(x).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Destination coordinate after travelling `distance_m` metres from `start`
/// along `bearing` degrees. A negative distance walks the bearing backwards,
/// which the runway-vector helpers use for approach legs behind the threshold.
pub fn destination_point(start: Coord, bearing: f64, distance_m: f64) -> Coord {
    let lat_rad = start.lat.to_radians();
    let long_rad = start.long.to_radians();
    let bearing_rad = bearing.to_radians();
    let angular = distance_m / EARTH_RADIUS_M;

    let dest_lat =
        (lat_rad.sin() * angular.cos() + lat_rad.cos() * angular.sin() * bearing_rad.cos()).asin();
    let dest_long = long_rad
        + (bearing_rad.sin() * angular.sin() * lat_rad.cos())
            .atan2(angular.cos() - lat_rad.sin() * dest_lat.sin());

    Coord {
        lat: dest_lat.to_degrees(),
        long: dest_long.to_degrees(),
    }
}

pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// Linear interpolation between two coordinates by fraction `a` in [0, 1].
pub fn lerp_coord(from: Coord, to: Coord, a: f64) -> Coord {
    Coord {
        lat: lerp(from.lat, to.lat, a),
        long: lerp(from.long, to.long, a),
    }
}

/// Intersection of segments p1->p2 and p3->p4 in the planar lat/long
/// approximation. Returns the parameter along p1->p2 and the crossing point.
/// Adequate at ATZ/CTA scale; not valid across the antimeridian.
pub fn segment_intersection(p1: Coord, p2: Coord, p3: Coord, p4: Coord) -> Option<(f64, Coord)> {
    let d1x = p2.long - p1.long;
    let d1y = p2.lat - p1.lat;
    let d2x = p4.long - p3.long;
    let d2y = p4.lat - p3.lat;

    let denom = d1x * d2y - d1y * d2x;
    if denom.abs() < 1e-12 {
        return None;
    }

    let t = ((p3.long - p1.long) * d2y - (p3.lat - p1.lat) * d2x) / denom;
    let u = ((p3.long - p1.long) * d1y - (p3.lat - p1.lat) * d1x) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some((
            t,
            Coord {
                lat: p1.lat + t * d1y,
                long: p1.long + t * d1x,
            },
        ))
    } else {
        None
    }
}

/// First crossing of segment a->b with a closed polygon boundary, as the
/// crossing with the smallest parameter along a->b.
pub fn first_boundary_crossing(a: Coord, b: Coord, boundary: &[Coord]) -> Option<(f64, Coord)> {
    if boundary.len() < 3 {
        return None;
    }

    let mut best: Option<(f64, Coord)> = None;
    for i in 0..boundary.len() {
        let edge_start = boundary[i];
        let edge_end = boundary[(i + 1) % boundary.len()];
        if let Some((t, point)) = segment_intersection(a, b, edge_start, edge_end) {
            if best.map_or(true, |(bt, _)| t < bt) {
                best = Some((t, point));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine() {
        // London to Paris, roughly 343 km
        let london = Coord::new(51.5074, -0.1278);
        let paris = Coord::new(48.8566, 2.3522);
        let dist = haversine_distance(london, paris);
        assert!((dist - 343_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_bearing() {
        let hdg = bearing_between(Coord::new(50.0, 0.0), Coord::new(51.0, 0.0));
        assert!(hdg < 1.0 || hdg > 359.0);

        let hdg = bearing_between(Coord::new(50.0, 0.0), Coord::new(50.0, 1.0));
        assert!((hdg - 90.0).abs() < 1.0);
    }

    #[test]
    fn test_destination_point_roundtrip() {
        let start = Coord::new(51.5, -2.5);
        let dest = destination_point(start, 45.0, 10_000.0);
        let dist = haversine_distance(start, dest);
        assert!((dist - 10_000.0).abs() < 1.0);

        let back = destination_point(dest, 45.0, -10_000.0);
        assert!((back.lat - start.lat).abs() < 1e-6);
        assert!((back.long - start.long).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_coord() {
        let mid = lerp_coord(Coord::new(50.0, -1.0), Coord::new(52.0, -3.0), 0.5);
        assert!((mid.lat - 51.0).abs() < 1e-9);
        assert!((mid.long - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_segment_intersection() {
        let hit = segment_intersection(
            Coord::new(0.0, 0.0),
            Coord::new(2.0, 2.0),
            Coord::new(0.0, 2.0),
            Coord::new(2.0, 0.0),
        );
        let (t, point) = hit.expect("segments should cross");
        assert!((t - 0.5).abs() < 1e-9);
        assert!((point.lat - 1.0).abs() < 1e-9);
        assert!((point.long - 1.0).abs() < 1e-9);

        let miss = segment_intersection(
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(0.0, 1.0),
            Coord::new(1.0, 1.0),
        );
        assert!(miss.is_none());
    }

    #[test]
    fn test_first_boundary_crossing() {
        // Unit square centred on the origin
        let square = [
            Coord::new(-1.0, -1.0),
            Coord::new(-1.0, 1.0),
            Coord::new(1.0, 1.0),
            Coord::new(1.0, -1.0),
        ];

        // Segment from inside to outside crosses exactly once
        let (t, point) =
            first_boundary_crossing(Coord::new(0.0, 0.0), Coord::new(0.0, 3.0), &square)
                .expect("should cross the east edge");
        assert!((point.long - 1.0).abs() < 1e-9);
        assert!(t > 0.0 && t < 1.0);

        // Segment fully inside never crosses
        assert!(
            first_boundary_crossing(Coord::new(0.0, 0.0), Coord::new(0.5, 0.5), &square).is_none()
        );
    }
}
