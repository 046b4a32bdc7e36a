//! Great-circle distance between coordinates.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two points.
///
/// Pure and symmetric; identical points yield 0.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_zero() {
        let p = GeoPoint::new(35.6704, 139.7026);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let shibuya = GeoPoint::new(35.6580, 139.7016);
        let shinjuku = GeoPoint::new(35.6896, 139.6922);
        assert_eq!(
            haversine_km(shibuya, shinjuku),
            haversine_km(shinjuku, shibuya)
        );
    }

    #[test]
    fn test_tokyo_yokohama() {
        // Tokyo station to Yokohama station is roughly 27 km.
        let tokyo = GeoPoint::new(35.6812, 139.7671);
        let yokohama = GeoPoint::new(35.4660, 139.6222);
        let d = haversine_km(tokyo, yokohama);
        assert!(d > 25.0 && d < 29.0, "got {}", d);
    }

    #[test]
    fn test_short_range() {
        // ~1.1 km apart within Shibuya.
        let a = GeoPoint::new(35.6580, 139.7016);
        let b = GeoPoint::new(35.6679, 139.7028);
        let d = haversine_km(a, b);
        assert!(d > 0.9 && d < 1.3, "got {}", d);
    }
}
