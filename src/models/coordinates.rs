use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Whether the fields hold finite, in-range degrees. Deserialized values
    /// bypass `new`, so catalogue cleaning checks this.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to `other` in kilometers (Haversine formula).
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        haversine_km(self, other)
    }
}

/// Haversine distance between two points in kilometers.
///
/// The intermediate term is clamped to `[0, 1]` so rounding on identical or
/// antipodal points cannot push `sqrt(1 - a)` into NaN.
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Coordinates> {
        vec![
            Coordinates::new(46.6, 2.2).unwrap(),     // France
            Coordinates::new(-25.0, 133.0).unwrap(),  // Australia
            Coordinates::new(51.0, 10.0).unwrap(),    // Germany
            Coordinates::new(-14.2, -51.9).unwrap(),  // Brazil
            Coordinates::new(64.9, -18.6).unwrap(),   // Iceland
            Coordinates::new(90.0, 0.0).unwrap(),     // North pole
            Coordinates::new(-90.0, 180.0).unwrap(),  // South pole
            Coordinates::new(0.0, -180.0).unwrap(),
            Coordinates::new(0.0, 180.0).unwrap(),
        ]
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(48.8566, 2.3522).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_is_valid_rejects_unchecked_values() {
        assert!(Coordinates { lat: 10.0, lng: 20.0 }.is_valid());
        assert!(!Coordinates { lat: 95.0, lng: 20.0 }.is_valid());
        assert!(!Coordinates { lat: 0.0, lng: f64::INFINITY }.is_valid());
    }

    #[test]
    fn test_distance_calculation() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let london = Coordinates::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_distance_is_symmetric_and_zero_on_self() {
        let points = sample_points();
        for a in &points {
            assert!(a.distance_to(a).abs() < 1e-6);
            for b in &points {
                assert!((a.distance_to(b) - b.distance_to(a)).abs() < 1e-9);
                assert!(a.distance_to(b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                for c in &points {
                    let direct = a.distance_to(c);
                    let detour = a.distance_to(b) + b.distance_to(c);
                    assert!(
                        direct <= detour + 1e-3,
                        "{:?} -> {:?} -> {:?}: {} > {}",
                        a,
                        b,
                        c,
                        direct,
                        detour
                    );
                }
            }
        }
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let a = Coordinates::new(0.0, 0.0).unwrap();
        let b = Coordinates::new(0.0, 180.0).unwrap();
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);

        let north = Coordinates::new(90.0, 0.0).unwrap();
        let south = Coordinates::new(-90.0, 0.0).unwrap();
        assert!(north.distance_to(&south).is_finite());
    }

    #[test]
    fn test_france_reference_distances() {
        let france = Coordinates::new(46.6, 2.2).unwrap();
        let australia = Coordinates::new(-25.0, 133.0).unwrap();
        let germany = Coordinates::new(51.0, 10.0).unwrap();

        let to_australia = france.distance_to(&australia);
        let to_germany = france.distance_to(&germany);

        assert!(to_australia > 14_000.0 && to_australia < 17_000.0);
        assert!(to_germany > 600.0 && to_germany < 900.0);
    }
}
