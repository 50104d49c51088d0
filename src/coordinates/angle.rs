//! # Angle helpers
//!
//! Angles travel through the crate as bare `f64` values whose unit is fixed
//! by the function that produces them: degrees for declination, latitude and
//! longitude, hours for right ascension and sidereal time.
//!
//! The helpers here wrap values into their canonical range, split them into
//! sexagesimal parts, and provide trigonometry that takes and returns degrees
//! so the formula code can be written the way the almanac tables print it.
//!
//! ```rust
//! use astrocalc::coordinates::angle::{limit_angle, limit_hour};
//!
//! assert_eq!(limit_angle(-90.0), 270.0);
//! assert_eq!(limit_hour(25.5), 1.5);
//! ```

use crate::constants::{DEG2RAD, DEG_PER_HOUR, RAD2DEG};

/// Wrap `value` into `[0, period)`
///
/// `rem_euclid` can round a tiny negative input up to exactly `period`,
/// which is folded back to zero.
fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle in degrees into `[0, 360)`
///
/// Negative inputs wrap to the equivalent positive angle, so
/// `limit_angle(-10.0) == 350.0`.
pub fn limit_angle(degrees: f64) -> f64 {
    wrap(degrees, 360.0)
}

/// Normalize a time or right ascension in hours into `[0, 24)`
pub fn limit_hour(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// Normalize an angle in degrees into `(-180, 180]`
pub fn limit_signed_angle(degrees: f64) -> f64 {
    let a = limit_angle(degrees);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Combine hours (or degrees), minutes and seconds into a decimal value
///
/// The components are summed as given; a negative value carries its sign on
/// every component, e.g. `hms_to_hours(-1.0, -30.0, 0.0) == -1.5`.
pub fn hms_to_hours(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours + minutes / 60.0 + seconds / 3600.0
}

/// Split a decimal value into whole hours, whole minutes and seconds
///
/// Each part is truncated toward zero, so the sign of a negative input shows
/// up on every non-zero component.
pub fn hours_to_hms(value: f64) -> (i32, i32, f64) {
    let hours = value.trunc();
    let rem = (value - hours) * 60.0;
    let minutes = rem.trunc();
    let seconds = (rem - minutes) * 60.0;
    (hours as i32, minutes as i32, seconds)
}

/// Convert hours of right ascension to degrees
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEG_PER_HOUR
}

/// Convert degrees to hours of right ascension
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / DEG_PER_HOUR
}

pub fn sind(degrees: f64) -> f64 {
    (degrees * DEG2RAD).sin()
}

pub fn cosd(degrees: f64) -> f64 {
    (degrees * DEG2RAD).cos()
}

pub fn tand(degrees: f64) -> f64 {
    (degrees * DEG2RAD).tan()
}

/// Arcsine returning degrees
pub fn asind(x: f64) -> f64 {
    x.asin() * RAD2DEG
}

/// Arccosine returning degrees
pub fn acosd(x: f64) -> f64 {
    x.acos() * RAD2DEG
}

/// Four-quadrant arctangent of `y / x` returning degrees in `(-180, 180]`
pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x) * RAD2DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(725.5, 5.5)]
    #[case(-10.0, 350.0)]
    #[case(-360.0, 0.0)]
    #[case(-725.0, 355.0)]
    fn test_limit_angle(#[case] input: f64, #[case] expected: f64) {
        assert_relative_eq!(limit_angle(input), expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(24.0, 0.0)]
    #[case(25.5, 1.5)]
    #[case(-1.0, 23.0)]
    #[case(-49.0, 23.0)]
    fn test_limit_hour(#[case] input: f64, #[case] expected: f64) {
        assert_relative_eq!(limit_hour(input), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_limit_angle_tiny_negative() {
        // -1e-17 rem 360 rounds to 360.0 in floating point
        let a = limit_angle(-1e-17);
        assert!((0.0..360.0).contains(&a), "got {}", a);
    }

    #[test]
    fn test_limit_range_and_congruence() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-1.0e5..1.0e5);

            let a = limit_angle(x);
            assert!((0.0..360.0).contains(&a));
            let turns = (x - a) / 360.0;
            assert_relative_eq!(turns, turns.round(), epsilon = 1e-9);

            let h = limit_hour(x);
            assert!((0.0..24.0).contains(&h));
            let days = (x - h) / 24.0;
            assert_relative_eq!(days, days.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_limit_signed_angle() {
        assert_relative_eq!(limit_signed_angle(190.0), -170.0);
        assert_relative_eq!(limit_signed_angle(180.0), 180.0);
        assert_relative_eq!(limit_signed_angle(-45.0), -45.0);
    }

    #[test]
    fn test_hms_round_trip() {
        let ra = hms_to_hours(7.0, 45.0, 18.946);
        assert_relative_eq!(ra, 7.755262778, epsilon = 1e-9);

        let (h, m, s) = hours_to_hms(ra);
        assert_eq!((h, m), (7, 45));
        assert_relative_eq!(s, 18.946, epsilon = 1e-8);
    }

    #[test]
    fn test_hms_negative_sign_on_every_part() {
        let value = hms_to_hours(-16.0, -42.0, -58.0);
        let (d, m, s) = hours_to_hms(value);
        assert_eq!((d, m), (-16, -42));
        assert_relative_eq!(s, -58.0, epsilon = 1e-8);
    }

    #[test]
    fn test_degree_trig() {
        assert_relative_eq!(sind(30.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(cosd(60.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(tand(45.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(asind(0.5), 30.0, epsilon = 1e-12);
        assert_relative_eq!(acosd(0.5), 60.0, epsilon = 1e-12);
        assert_relative_eq!(atan2d(1.0, -1.0), 135.0, epsilon = 1e-12);
        assert_relative_eq!(hours_to_degrees(degrees_to_hours(123.4)), 123.4);
    }
}
