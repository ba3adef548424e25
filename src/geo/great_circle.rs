/// Mean Earth radius in metres, matching the unit of road-network edge costs.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic position of a vertex, stored in radians.
///
/// Coordinates are converted from the dataset's degree representation once at
/// load time so the distance computation never re-converts per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Builds a point from coordinates expressed in degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        GeoPoint {
            lat: lat.to_radians(),
            lon: lon.to_radians(),
        }
    }
}

/// Haversine distance between two points, in metres.
///
/// Used as the search heuristic: the crow-flies distance never overestimates
/// the road distance between two vertices, so it is an admissible (and, along
/// road edges, consistent) lower bound.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = b.lat - a.lat;
    let dlon = b.lon - a.lon;

    let h = (dlat / 2.0).sin().powi(2) + a.lat.cos() * b.lat.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_are_zero_distance() {
        let p = GeoPoint::from_degrees(48.8566, 2.3522);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }

    #[test]
    fn test_quarter_circumference_along_equator() {
        let a = GeoPoint::from_degrees(0.0, 0.0);
        let b = GeoPoint::from_degrees(0.0, 90.0);

        let expected = EARTH_RADIUS_M * std::f64::consts::FRAC_PI_2;
        assert!((great_circle_distance(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint::from_degrees(10.0, 20.0);
        let b = GeoPoint::from_degrees(11.0, 20.0);

        // one degree of latitude on a 6371 km sphere is ~111.19 km
        let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        assert!((great_circle_distance(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::from_degrees(40.4168, -3.7038);
        let b = GeoPoint::from_degrees(41.3874, 2.1686);

        let ab = great_circle_distance(a, b);
        let ba = great_circle_distance(b, a);
        assert_eq!(ab, ba);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_madrid_to_barcelona_magnitude() {
        let madrid = GeoPoint::from_degrees(40.4168, -3.7038);
        let barcelona = GeoPoint::from_degrees(41.3874, 2.1686);

        // great-circle distance is a bit above 500 km
        let d = great_circle_distance(madrid, barcelona);
        assert!(d > 500_000.0 && d < 520_000.0);
    }
}
