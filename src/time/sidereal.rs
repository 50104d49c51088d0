//! Greenwich sidereal time
//!
//! Mean sidereal time follows the IAU 1982 expression in centuries from
//! J2000. Apparent sidereal time adds the equation of the equinoxes from
//! the selected nutation model. All results are hours in `[0, 24)`.

use super::{hour_of_day, midnight, Epoch, JulianDate};
use crate::constants::{ASEC_PER_DEG, DEG_PER_HOUR, J2000, SIDEREAL_RATE};
use crate::coordinates::angle::{cosd, limit_angle, limit_hour, sind};
use crate::nutationlib::{obliquity, NutationModel};

/// Greenwich mean sidereal time at 0h UT of the civil day containing `jd`
pub fn julian_to_sidereal(jd: JulianDate) -> f64 {
    let t = Epoch::J2000.centuries(midnight(jd));
    let theta = 100.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    limit_angle(theta) / DEG_PER_HOUR
}

/// Greenwich mean sidereal time for a date and UT hours past its midnight
pub fn julian_time_to_sidereal(jd: JulianDate, ut_hours: f64) -> f64 {
    limit_hour(julian_to_sidereal(jd) + ut_hours * SIDEREAL_RATE)
}

/// Greenwich mean sidereal time at the instant `jd`
pub fn greenwich_sidereal(jd: JulianDate) -> f64 {
    julian_time_to_sidereal(jd, hour_of_day(jd))
}

/// Hours to add to mean sidereal time to get apparent sidereal time
pub fn mean_to_apparent_sidereal(jd: JulianDate, model: NutationModel) -> f64 {
    let nut = model.nutation(jd);
    nut.delta_psi * cosd(obliquity(jd)) / DEG_PER_HOUR / ASEC_PER_DEG
}

/// Greenwich apparent sidereal time at the instant `jd`
pub fn greenwich_apparent_sidereal(jd: JulianDate, model: NutationModel) -> f64 {
    limit_hour(greenwich_sidereal(jd) + mean_to_apparent_sidereal(jd, model))
}

/// Low-precision equation of the equinoxes in hours
///
/// Two-term approximation in days from J2000; adequate to about 0.1 s of
/// time without evaluating a nutation series.
pub fn equation_of_equinoxes(jd: JulianDate) -> f64 {
    let d = jd - J2000;
    let omega = 125.04 - 0.052_954 * d;
    let sun = 280.47 + 0.985_65 * d;
    let epsilon = 23.4393 - 0.000_000_4 * d;
    let psi = -0.000_319 * sind(omega) - 0.000_024 * sind(2.0 * sun);
    psi * cosd(epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::angle::hms_to_hours;
    use crate::time::{civil_time_to_julian, civil_to_julian};
    use approx::assert_relative_eq;

    #[test]
    fn test_sidereal_at_midnight() {
        // 1987 April 10, 0h UT: 13h10m46.3668s
        let jd = civil_to_julian(1987, 4, 10.0);
        let expected = hms_to_hours(13.0, 10.0, 46.3668);
        assert_relative_eq!(julian_to_sidereal(jd), expected, epsilon = 1e-7);

        // any instant of the same civil day maps to the same midnight
        assert_relative_eq!(julian_to_sidereal(jd + 0.75), expected, epsilon = 1e-7);
    }

    #[test]
    fn test_sidereal_at_instant() {
        // 1987 April 10, 19h21m00s UT: 8h34m57.0896s
        let jd = civil_time_to_julian(1987, 4, 10, 19, 21, 0.0);
        let expected = hms_to_hours(8.0, 34.0, 57.0896);
        assert_relative_eq!(greenwich_sidereal(jd), expected, epsilon = 1e-5);

        let midnight = civil_to_julian(1987, 4, 10.0);
        assert_relative_eq!(
            julian_time_to_sidereal(midnight, 19.35),
            expected,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_apparent_sidereal() {
        // nutation of -3.788" gives -0.2317 s of time
        let jd = civil_to_julian(1987, 4, 10.0);
        let correction = mean_to_apparent_sidereal(jd, NutationModel::Full);
        assert_relative_eq!(correction * 3600.0, -0.2317, epsilon = 1e-3);

        let gast = greenwich_apparent_sidereal(jd, NutationModel::Full);
        assert_relative_eq!(gast, hms_to_hours(13.0, 10.0, 46.1351), epsilon = 1e-6);
    }

    #[test]
    fn test_equation_of_equinoxes_matches_nutation() {
        for jd in [civil_to_julian(1987, 4, 10.0), civil_to_julian(2010, 6, 1.0)] {
            let approx = equation_of_equinoxes(jd);
            let full = mean_to_apparent_sidereal(jd, NutationModel::Full);
            assert_relative_eq!(approx, full, epsilon = 0.1 / 3600.0);
        }
    }
}
