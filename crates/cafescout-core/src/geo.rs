//! Great-circle distance between geographic coordinates.
//!
//! Haversine on a spherical Earth; accurate to well under a kilometer at
//! city scale, which is all the distance annotations need.

use crate::cafe::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometers.
///
/// Pure and deterministic: returns 0 for identical inputs and a finite,
/// non-negative value for any finite coordinates.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinate = Coordinate {
        lat: 48.8566,
        lon: 2.3522,
    };
    const LONDON: Coordinate = Coordinate {
        lat: 51.5074,
        lon: -0.1278,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert!(distance_km(PARIS, PARIS).abs() < f64::EPSILON);
        let equator = Coordinate { lat: 0.0, lon: 0.0 };
        assert!(distance_km(equator, equator).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(PARIS, LONDON);
        let back = distance_km(LONDON, PARIS);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn paris_to_london_fixture() {
        let d = distance_km(PARIS, LONDON);
        assert!(d > 343.0 && d < 344.5, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = Coordinate { lat: 0.0, lon: 0.0 };
        let b = Coordinate {
            lat: 0.0,
            lon: 180.0,
        };
        let d = distance_km(a, b);
        // π · R ≈ 20015 km
        assert!((d - 20015.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn short_hop_is_positive_and_small() {
        let a = PARIS;
        let b = Coordinate {
            lat: 48.8600,
            lon: 2.3522,
        };
        let d = distance_km(a, b);
        assert!(d > 0.0 && d < 1.0, "got {d}");
    }
}
