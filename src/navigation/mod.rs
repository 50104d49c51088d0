//! Celestial navigation
//!
//! Hour angles as used in the Nautical Almanac: sidereal hour angle (SHA)
//! measured westward from the equinox, Greenwich hour angle (GHA) measured
//! westward from Greenwich, and local hour angle (LHA) from the observer's
//! meridian. All angles are degrees. Unlike the rest of the crate,
//! longitudes here are positive east, as on a chart.

use crate::coordinates::angle::{acosd, asind, cosd, limit_angle, sind, tand};
use crate::coordinates::Horizontal;
use crate::time::{greenwich_sidereal, JulianDate};
use serde::{Deserialize, Serialize};

/// Sidereal hour angle of a right ascension in hours
pub fn ra_to_sha(ra: f64) -> f64 {
    limit_angle(-15.0 * ra)
}

/// Greenwich hour angle from a sidereal hour angle at the instant `jd`
pub fn sha_to_gha(sha: f64, jd: JulianDate) -> f64 {
    limit_angle(sha + 15.0 * greenwich_sidereal(jd))
}

/// Local hour angle from a Greenwich hour angle; `longitude` east-positive
pub fn gha_to_lha(gha: f64, longitude: f64) -> f64 {
    limit_angle(gha + longitude)
}

/// Interpolate between two hourly almanac values
///
/// Only the fractional part of `hours` is used, so 14.25 means a quarter
/// of the way from `a` to `b`.
pub fn interpolate_hourly(a: f64, b: f64, hours: f64) -> f64 {
    a + (b - a) * hours.fract()
}

/// Computed altitude (Hc) and azimuth (Zn) of a body
///
/// This is the sight reduction formula; with whole-degree inputs it
/// reproduces the tabulated sight reduction tables.
pub fn altitude_azimuth(lha: f64, dec: f64, lat: f64) -> Horizontal {
    let s = sind(dec);
    let c = cosd(dec) * cosd(lha);
    let altitude = asind(s * sind(lat) + c * cosd(lat));

    let cos_hc = cosd(altitude);
    let z = if cos_hc == 0.0 {
        0.0
    } else {
        acosd(((s * cosd(lat) - c * sind(lat)) / cos_hc).clamp(-1.0, 1.0))
    };

    let azimuth = if limit_angle(lha) > 180.0 { z } else { 360.0 - z };
    Horizontal { azimuth, altitude }
}

/// A raw sextant observation and the conditions it was taken in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SextantSight {
    /// Sextant reading Hs, degrees
    pub sextant_altitude: f64,
    /// Index error, degrees, added to the reading
    pub index_error: f64,
    /// Height of eye above sea level, metres
    pub height_m: f64,
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Pressure in millibars; zero when unknown
    pub pressure_mb: f64,
    /// Horizontal parallax from the almanac, degrees; zero for stars
    pub horizontal_parallax: f64,
}

impl SextantSight {
    /// Sight of a star with no index error at standard conditions
    pub fn new(sextant_altitude: f64, height_m: f64) -> Self {
        Self {
            sextant_altitude,
            index_error: 0.0,
            height_m,
            temperature_c: 10.0,
            pressure_mb: 0.0,
            horizontal_parallax: 0.0,
        }
    }

    /// Dip of the sea horizon, degrees
    pub fn dip(&self) -> f64 {
        0.0293 * self.height_m.sqrt()
    }

    /// Apparent altitude: the reading corrected for index error and dip
    pub fn apparent_altitude(&self) -> f64 {
        self.sextant_altitude + self.index_error - self.dip()
    }
}

/// Observed altitude Ho from a sextant sight
///
/// Corrects for dip, refraction (scaled for temperature and pressure when
/// a pressure is given) and parallax in altitude.
pub fn sextant_to_observed_altitude(sight: &SextantSight) -> f64 {
    let h = sight.apparent_altitude();

    let mut refraction = 0.0167 / tand(h + 7.31 / (h + 4.4));
    if sight.pressure_mb > 0.0 {
        refraction *= 0.28 * sight.pressure_mb / (sight.temperature_c + 273.0);
    }
    let parallax = sight.horizontal_parallax * cosd(h);

    h - refraction + parallax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::civil_time_to_julian;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_ra_to_sha() {
        assert_relative_eq!(ra_to_sha(6.0), 270.0);
        assert_eq!(ra_to_sha(0.0), 0.0);
        assert_relative_eq!(ra_to_sha(23.0), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sha_to_gha() {
        // SHA zero is the first point of Aries, whose GHA is 15 * GMST
        let jd = civil_time_to_julian(1987, 4, 10, 19, 21, 0.0);
        assert_relative_eq!(sha_to_gha(0.0, jd), 8.582_524_884 * 15.0, epsilon = 1e-4);

        // a body on the Greenwich meridian
        let gha = sha_to_gha(ra_to_sha(8.582_524_884), jd);
        assert!(gha.min(360.0 - gha) < 1e-4, "GHA {gha}");
    }

    #[test]
    fn test_gha_to_lha() {
        assert_relative_eq!(gha_to_lha(53.0, -16.0), 37.0);
        assert_relative_eq!(gha_to_lha(350.0, 20.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_hourly() {
        assert_relative_eq!(interpolate_hourly(10.0, 25.0, 14.2), 13.0, epsilon = 1e-12);
        assert_eq!(interpolate_hourly(10.0, 25.0, 3.0), 10.0);
    }

    #[rstest]
    #[case(37.0, -15.0, 32.0, 31.134_600_26, 222.776_056_14)]
    #[case(300.0, 20.0, 45.0, 35.034_968_79, 96.337_742_64)]
    fn test_altitude_azimuth(
        #[case] lha: f64,
        #[case] dec: f64,
        #[case] lat: f64,
        #[case] altitude: f64,
        #[case] azimuth: f64,
    ) {
        let hz = altitude_azimuth(lha, dec, lat);
        assert_relative_eq!(hz.altitude, altitude, epsilon = 1e-7);
        assert_relative_eq!(hz.azimuth, azimuth, epsilon = 1e-7);
    }

    #[test]
    fn test_body_at_zenith() {
        let hz = altitude_azimuth(0.0, 35.0, 35.0);
        assert_relative_eq!(hz.altitude, 90.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sextant_corrections() {
        let moon = SextantSight {
            sextant_altitude: 21.3283,
            index_error: 0.0,
            height_m: 5.4,
            temperature_c: -3.0,
            pressure_mb: 982.0,
            horizontal_parallax: 0.0024,
        };
        assert_relative_eq!(sextant_to_observed_altitude(&moon), 21.219_374_82, epsilon = 1e-7);

        let star = SextantSight {
            pressure_mb: 1010.0,
            ..SextantSight::new(33.5, 2.4)
        };
        assert_relative_eq!(sextant_to_observed_altitude(&star), 33.429_536_20, epsilon = 1e-7);
    }

    #[test]
    fn test_unknown_pressure_skips_scaling() {
        let sight = SextantSight::new(45.0, 0.0);
        let expected = 45.0 - 0.0167 / tand(45.0 + 7.31 / 49.4);
        assert_relative_eq!(sextant_to_observed_altitude(&sight), expected, epsilon = 1e-12);
    }
}
