//! Precession of equatorial coordinates
//!
//! The equinox drifts westward about 50" per year. [`precession_rate`] gives
//! the annual change of a star's coordinates; [`precession`] carries a
//! position rigorously from one equinox to another through the angles
//! zeta, z and theta.

use crate::constants::{ASEC2RAD, B1900, DEG2RAD, RAD2DEG, TROPICAL_CENTURY};
use crate::coordinates::angle::{degrees_to_hours, hours_to_degrees, limit_hour};
use crate::coordinates::Equatorial;
use crate::time::{Epoch, JulianDate};
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Annual precession of a position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionRate {
    /// Change in declination, degrees per year
    pub d_dec: f64,
    /// Change in right ascension, hours per year
    pub d_ra: f64,
}

/// Annual precession in declination and right ascension at `jd`
///
/// Uses the rates m (seconds of RA per year) and n (arcseconds per year)
/// with centuries counted from 1900.
pub fn precession_rate(position: &Equatorial, jd: JulianDate) -> PrecessionRate {
    let t = Epoch::J1900.centuries(jd);
    let m = (3.07234 + 0.00186 * t) * 15.0 * ASEC2RAD;
    let n = (20.0468 - 0.0085 * t) * ASEC2RAD;

    let dec = position.dec * DEG2RAD;
    let ra = hours_to_degrees(position.ra) * DEG2RAD;

    let d_ra = m + n * ra.sin() * dec.tan();
    let d_dec = n * ra.cos();

    PrecessionRate {
        d_dec: d_dec * RAD2DEG,
        d_ra: degrees_to_hours(d_ra * RAD2DEG),
    }
}

/// Precession angles zeta, z and theta in radians between two equinoxes
fn precession_angles(jd0: JulianDate, jd1: JulianDate) -> (f64, f64, f64) {
    // Tropical centuries
    let t0 = (jd0 - B1900) / TROPICAL_CENTURY;
    let t = (jd1 - jd0) / TROPICAL_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let zeta = (2304.250 + 1.396 * t0) * t + 0.302 * t2 + 0.018 * t3;
    let z = zeta + 0.791 * t2 + 0.001 * t3;
    let theta = (2004.682 - 0.83 * t0) * t - 0.426 * t2 - 0.042 * t3;

    (zeta * ASEC2RAD, z * ASEC2RAD, theta * ASEC2RAD)
}

/// Carry a position from the equinox of `jd0` to the equinox of `jd1`
///
/// Equal dates return the input unchanged. Right ascension is normalized to
/// `[0, 24)`.
pub fn precession(position: &Equatorial, jd0: JulianDate, jd1: JulianDate) -> Equatorial {
    if jd0 == jd1 {
        return *position;
    }

    let (zeta, z, theta) = precession_angles(jd0, jd1);
    let dec = position.dec * DEG2RAD;
    let ra = hours_to_degrees(position.ra) * DEG2RAD;

    let a = dec.cos() * (ra + zeta).sin();
    let b = theta.cos() * dec.cos() * (ra + zeta).cos() - theta.sin() * dec.sin();
    let c = theta.sin() * dec.cos() * (ra + zeta).cos() + theta.cos() * dec.sin();

    let ra1 = a.atan2(b) + z;
    let dec1 = c.clamp(-1.0, 1.0).asin();

    Equatorial::new(
        dec1 * RAD2DEG,
        limit_hour(degrees_to_hours(ra1 * RAD2DEG)),
    )
}

/// Rotation matrix taking unit vectors at the equinox of `jd0` to `jd1`
///
/// Equivalent to [`precession`] for rectangular coordinates:
/// `R3(-z) * R2(theta) * R3(-zeta)`.
pub fn precession_matrix(jd0: JulianDate, jd1: JulianDate) -> Matrix3<f64> {
    let (zeta, z, theta) = precession_angles(jd0, jd1);
    let r1 = Rotation3::from_axis_angle(&Vector3::z_axis(), z);
    let r2 = Rotation3::from_axis_angle(&Vector3::y_axis(), -theta);
    let r3 = Rotation3::from_axis_angle(&Vector3::z_axis(), zeta);
    (r1 * r2 * r3).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{B1950, J2000};
    use crate::coordinates::angle::hms_to_hours;
    use crate::coordinates::{polar_to_rectangular, rectangular_to_polar, Polar};
    use crate::time::civil_to_julian;
    use approx::assert_relative_eq;

    #[test]
    fn test_precession_rate_regulus() {
        // Regulus on 1978 January 1: about +3.21s and -17.6" per year
        let regulus = Equatorial::new(
            hms_to_hours(12.0, 12.0, 45.0),
            hms_to_hours(10.0, 5.0, 42.7),
        );
        let rate = precession_rate(&regulus, civil_to_julian(1978, 1, 1.0));
        assert_relative_eq!(rate.d_ra * 3600.0, 3.2121, epsilon = 1e-3);
        assert_relative_eq!(rate.d_dec * 3600.0, -17.5996, epsilon = 1e-3);
    }

    #[test]
    fn test_precession_theta_persei() {
        // From the 1950.0 equinox to 1978 November 13.19
        let star = Equatorial::new(
            hms_to_hours(49.0, 1.0, 6.45) - 28.8665 * 0.083 / 3600.0,
            hms_to_hours(2.0, 40.0, 46.276) + 28.8665 * 0.0342 / 3600.0,
        );
        let jd1 = civil_to_julian(1978, 11, 13.0) + 0.19;
        let moved = precession(&star, B1950, jd1);
        assert_relative_eq!(moved.ra, 2.712_182_5, epsilon = 1e-5);
        assert_relative_eq!(moved.dec, 49.140_770, epsilon = 1e-5);
    }

    #[test]
    fn test_precession_same_date_is_identity() {
        let star = Equatorial::new(-16.7, 6.75);
        assert_eq!(precession(&star, J2000, J2000), star);
    }

    #[test]
    fn test_precession_round_trip() {
        let star = Equatorial::new(41.27, 0.712);
        let jd1 = civil_to_julian(2050, 1, 1.0);
        let there = precession(&star, J2000, jd1);
        let back = precession(&there, jd1, J2000);
        assert_relative_eq!(back.dec, star.dec, epsilon = 1e-6);
        assert_relative_eq!(back.ra, star.ra, epsilon = 1e-6);
    }

    #[test]
    fn test_precession_matrix_matches_angles() {
        let jd1 = civil_to_julian(2028, 11, 13.0);
        let star = Equatorial::new(49.22, 2.72);

        let v = polar_to_rectangular(&Polar::new(star.dec, star.ra * 15.0, 1.0));
        let p = rectangular_to_polar(&(precession_matrix(J2000, jd1) * v));
        let moved = precession(&star, J2000, jd1);

        assert_relative_eq!(p.lat, moved.dec, epsilon = 1e-9);
        assert_relative_eq!(p.lon / 15.0, moved.ra, epsilon = 1e-9);
    }

    #[test]
    fn test_precession_matrix_identity_at_same_epoch() {
        let m = precession_matrix(J2000, J2000);
        assert_relative_eq!(m, Matrix3::identity(), epsilon = 1e-15);
    }
}
