//! Equatorial ⇄ geocentric unit-vector conversion.

use glam::Vec3;

/// Degrees of right ascension per hour.
const DEGREES_PER_HOUR: f32 = 15.0;

/// Map right ascension and declination (both in degrees) to a unit
/// direction vector in the geocentric frame.
///
/// The inputs are not range-checked: a declination outside ±90° still
/// produces a finite unit vector, it just points somewhere the physical sky
/// would not.
pub fn geocentric_coords(ra_deg: f32, dec_deg: f32) -> Vec3 {
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();

    Vec3::new(cos_ra * cos_dec, sin_ra * cos_dec, sin_dec)
}

/// Convert a right ascension in hours to degrees.
pub fn hours_to_degrees(hours: f32) -> f32 {
    hours * DEGREES_PER_HOUR
}

/// Angle between two directions, in degrees.
///
/// Inputs need not be normalized.
pub fn angular_distance_deg(a: Vec3, b: Vec3) -> f32 {
    a.angle_between(b).to_degrees()
}

/// An equatorial sky position in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaDec {
    /// Right ascension in `[0, 360)`.
    pub ra: f32,
    /// Declination in `[-90, 90]`.
    pub dec: f32,
}

impl RaDec {
    pub fn new(ra: f32, dec: f32) -> Self {
        Self { ra, dec }
    }

    /// Recover the equatorial position of a direction vector.
    ///
    /// The vector is normalized first. A zero vector maps to `(0, 0)`, and
    /// the poles report a right ascension of zero.
    pub fn from_geocentric(v: Vec3) -> Self {
        let unit = v.normalize_or_zero();
        if unit == Vec3::ZERO {
            return Self::new(0.0, 0.0);
        }

        let dec = unit.z.clamp(-1.0, 1.0).asin().to_degrees();
        let ra = if unit.x == 0.0 && unit.y == 0.0 {
            0.0
        } else {
            unit.y.atan2(unit.x).to_degrees().rem_euclid(360.0)
        };
        Self::new(ra, dec)
    }

    /// Unit vector for this position; same as [`geocentric_coords`].
    pub fn to_geocentric(self) -> Vec3 {
        geocentric_coords(self.ra, self.dec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_cardinal_directions() {
        assert_vec_close(geocentric_coords(0.0, 0.0), Vec3::X);
        assert_vec_close(geocentric_coords(90.0, 0.0), Vec3::Y);
        assert_vec_close(geocentric_coords(180.0, 0.0), Vec3::NEG_X);
        assert_vec_close(geocentric_coords(0.0, 90.0), Vec3::Z);
        assert_vec_close(geocentric_coords(123.0, -90.0), Vec3::NEG_Z);
    }

    #[test]
    fn test_outputs_are_unit_vectors() {
        for (ra, dec) in [(10.5, -20.0), (359.9, 89.9), (-45.0, 12.0), (720.0, 400.0)] {
            let len = geocentric_coords(ra, dec).length();
            assert!(
                (len - 1.0).abs() < EPS,
                "({ra}, {dec}) is not a unit vector: length = {len}"
            );
        }
    }

    #[test]
    fn test_is_deterministic() {
        let a = geocentric_coords(10.5, -20.0);
        let b = geocentric_coords(10.5, -20.0);
        assert_eq!(a.to_array(), b.to_array());
    }

    #[test]
    fn test_out_of_range_declination_passes_through() {
        // 100° is past the pole: same as dec 80° on the opposite meridian.
        let beyond = geocentric_coords(0.0, 100.0);
        assert!(beyond.is_finite());
        assert_vec_close(beyond, geocentric_coords(180.0, 80.0));
    }

    #[test]
    fn test_ra_dec_inverse() {
        let original = RaDec::new(201.3, -11.2);
        let recovered = RaDec::from_geocentric(original.to_geocentric());
        assert!((recovered.ra - original.ra).abs() < 1e-3);
        assert!((recovered.dec - original.dec).abs() < 1e-3);
    }

    #[test]
    fn test_ra_dec_inverse_wraps_negative_ra() {
        let recovered = RaDec::from_geocentric(geocentric_coords(-30.0, 0.0));
        assert!((recovered.ra - 330.0).abs() < 1e-3, "got {}", recovered.ra);
    }

    #[test]
    fn test_ra_dec_of_zero_vector() {
        assert_eq!(RaDec::from_geocentric(Vec3::ZERO), RaDec::new(0.0, 0.0));
    }

    #[test]
    fn test_hours_to_degrees() {
        assert_eq!(hours_to_degrees(0.0), 0.0);
        assert_eq!(hours_to_degrees(6.0), 90.0);
        assert_eq!(hours_to_degrees(24.0), 360.0);
    }

    #[test]
    fn test_angular_distance() {
        let d = angular_distance_deg(geocentric_coords(0.0, 0.0), geocentric_coords(90.0, 0.0));
        assert!((d - 90.0).abs() < 1e-3);
        let same = angular_distance_deg(Vec3::Z, Vec3::Z * 3.0);
        assert!(same.abs() < 1e-3);
    }
}
