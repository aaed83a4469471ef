//! Great-circle distance between coordinates.

use tripdeck_core::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres. Inputs are degrees and are not
/// range-checked.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[must_use]
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    haversine_km(from.lat, from.lng, to.lat, to.lng)
}

/// Formats a distance the way the explore page shows it, e.g. `"2.4 km"`.
#[must_use]
pub fn format_km(km: f64) -> String {
    format!("{km:.1} km")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: Coordinate = Coordinate {
        lat: 40.7128,
        lng: -74.0060,
    };
    const LOS_ANGELES: Coordinate = Coordinate {
        lat: 34.0522,
        lng: -118.2437,
    };
    const LONDON: Coordinate = Coordinate {
        lat: 51.5074,
        lng: -0.1278,
    };
    const PARIS: Coordinate = Coordinate {
        lat: 48.8566,
        lng: 2.3522,
    };

    #[test]
    fn identical_points_are_zero_apart() {
        assert!(distance_km(NEW_YORK, NEW_YORK).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(LONDON, LOS_ANGELES);
        let back = distance_km(LOS_ANGELES, LONDON);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn new_york_to_los_angeles_matches_published_distance() {
        // Published great-circle distance is roughly 3,936 km.
        let km = distance_km(NEW_YORK, LOS_ANGELES);
        assert!((km - 3936.0).abs() / 3936.0 < 0.01, "got {km}");
    }

    #[test]
    fn london_to_paris_matches_published_distance() {
        let km = distance_km(LONDON, PARIS);
        assert!((km - 344.0).abs() / 344.0 < 0.01, "got {km}");
    }

    #[test]
    fn distance_is_never_negative() {
        let km = haversine_km(-33.8688, 151.2093, 64.1466, -21.9426);
        assert!(km > 0.0);
    }

    #[test]
    fn format_km_uses_one_decimal() {
        assert_eq!(format_km(0.04), "0.0 km");
        assert_eq!(format_km(2.46), "2.5 km");
        assert_eq!(format_km(12.0), "12.0 km");
    }
}
