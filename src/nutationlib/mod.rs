//! Nutation and the obliquity of the ecliptic
//!
//! Implements nutation in longitude (delta-psi) and obliquity
//! (delta-epsilon) in three precisions, and the mean obliquity of the
//! ecliptic in two. Results are in arcseconds for nutation and degrees for
//! obliquity; nothing is cached between calls.
//!
//! - [`NutationModel::Full`]: 63-term series in D, M, M', F and Omega,
//!   centuries from J2000. Good to about 0.0003".
//! - [`NutationModel::Abridged`]: four terms from Omega and the mean
//!   longitudes of Sun and Moon. Good to about 0.5".
//! - [`NutationModel::Legacy1900`]: 13-term series with centuries from 1900,
//!   as tabulated for pocket calculators. Good to about 0.1".

mod table22a;

use crate::constants::{ASEC_PER_DEG, EARTH_TILT};
use crate::coordinates::angle::{cosd, sind};
use crate::time::{Epoch, JulianDate};
use serde::{Deserialize, Serialize};

/// Nutation for one date, arcseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutationResult {
    /// Nutation in longitude
    pub delta_psi: f64,
    /// Nutation in obliquity
    pub delta_epsilon: f64,
}

/// Precision of the nutation series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutationModel {
    #[default]
    Full,
    Abridged,
    Legacy1900,
}

impl NutationModel {
    /// Evaluate this model at `jd`
    pub fn nutation(&self, jd: JulianDate) -> NutationResult {
        match self {
            NutationModel::Full => nutation_full(jd),
            NutationModel::Abridged => nutation_abridged(jd),
            NutationModel::Legacy1900 => nutation_legacy_1900(jd),
        }
    }
}

/// Formula for the mean obliquity of the ecliptic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObliquityModel {
    /// Cubic in centuries from J2000; within 1" over +-2000 years
    #[default]
    Cubic,
    /// Laskar's tenth-degree polynomial; within 0.01" over +-1000 years
    Laskar,
}

impl ObliquityModel {
    pub fn mean_obliquity(&self, jd: JulianDate) -> f64 {
        match self {
            ObliquityModel::Cubic => obliquity(jd),
            ObliquityModel::Laskar => obliquity_laskar(jd),
        }
    }
}

/// Mean obliquity of the ecliptic in degrees, without nutation
pub fn obliquity(jd: JulianDate) -> f64 {
    let t = Epoch::J2000.centuries(jd);
    EARTH_TILT - (46.8150 / ASEC_PER_DEG) * t - (0.00059 / ASEC_PER_DEG) * t * t
        + (0.001813 / ASEC_PER_DEG) * t * t * t
}

/// Laskar coefficients in arcseconds, powers of ten-millennia from J2000
const LASKAR_COEFFS: [f64; 11] = [
    84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean obliquity of the ecliptic in degrees from Laskar's series
///
/// Valid for ten thousand years either side of J2000.
pub fn obliquity_laskar(jd: JulianDate) -> f64 {
    let u = Epoch::J2000.centuries(jd) / 100.0;
    let asec = LASKAR_COEFFS
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * u + c);
    asec / ASEC_PER_DEG
}

/// True obliquity: mean obliquity corrected by nutation in obliquity
pub fn true_obliquity(jd: JulianDate, obliquity: ObliquityModel, nutation: NutationModel) -> f64 {
    obliquity.mean_obliquity(jd) + nutation.nutation(jd).delta_epsilon / ASEC_PER_DEG
}

/// Nutation with the default model
pub fn nutation(jd: JulianDate) -> NutationResult {
    NutationModel::default().nutation(jd)
}

/// Delaunay arguments in degrees, centuries from J2000
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun
    pub d: f64,
    /// Mean anomaly of the Sun
    pub m: f64,
    /// Mean anomaly of the Moon
    pub m_prime: f64,
    /// Moon's argument of latitude
    pub f: f64,
    /// Longitude of the ascending node of the Moon's mean orbit
    pub omega: f64,
}

impl FundamentalArguments {
    fn as_array(&self) -> [f64; 5] {
        [self.d, self.m, self.m_prime, self.f, self.omega]
    }
}

/// Compute the five fundamental arguments for time `t` in centuries from J2000
pub fn fundamental_arguments(t: f64) -> FundamentalArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    FundamentalArguments {
        d: 297.85036 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0,
        m: 357.52772 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0,
        m_prime: 134.96298 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0,
        f: 93.27191 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0,
        omega: moon_node(t),
    }
}

/// Longitude of the Moon's mean ascending node, degrees, centuries from J2000
fn moon_node(t: f64) -> f64 {
    125.04452 - 1934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0
}

fn nutation_full(jd: JulianDate) -> NutationResult {
    let t = Epoch::J2000.centuries(jd);
    let args = fundamental_arguments(t).as_array();

    let mut delta_psi = 0.0;
    let mut delta_epsilon = 0.0;

    for term in table22a::TERMS.iter() {
        let arg: f64 = term
            .multipliers
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| k as f64 * a)
            .sum();
        delta_psi += (term.psi[0] + term.psi[1] * t) * sind(arg);
        delta_epsilon += (term.eps[0] + term.eps[1] * t) * cosd(arg);
    }

    NutationResult {
        delta_psi: delta_psi * table22a::COEFF_UNIT,
        delta_epsilon: delta_epsilon * table22a::COEFF_UNIT,
    }
}

fn nutation_abridged(jd: JulianDate) -> NutationResult {
    let t = Epoch::J2000.centuries(jd);
    let sun = 280.4665 + 36_000.7698 * t;
    let moon = 218.3165 + 481_267.8813 * t;
    let omega = moon_node(t);

    NutationResult {
        delta_psi: -17.20 * sind(omega) - 1.32 * sind(2.0 * sun) - 0.23 * sind(2.0 * moon)
            + 0.21 * sind(2.0 * omega),
        delta_epsilon: 9.20 * cosd(omega) + 0.57 * cosd(2.0 * sun) + 0.10 * cosd(2.0 * moon)
            - 0.09 * cosd(2.0 * omega),
    }
}

fn nutation_legacy_1900(jd: JulianDate) -> NutationResult {
    let t = Epoch::J1900.centuries(jd);
    let t2 = t * t;

    // Mean longitudes and anomalies of Sun and Moon, node of the Moon
    let l = 279.6967 + 36_000.7689 * t + 0.000_303 * t2;
    let lm = 270.4342 + 481_267.8831 * t - 0.001_133 * t2;
    let m = 358.4758 + 35_999.0498 * t - 0.000_150 * t2;
    let mm = 296.1046 + 477_198.8491 * t + 0.009_192 * t2;
    let om = 259.1833 - 1934.1420 * t + 0.002_078 * t2;

    let delta_psi = -(17.2327 + 0.01737 * t) * sind(om)
        - (1.2729 + 0.00013 * t) * sind(2.0 * l)
        + 0.2088 * sind(2.0 * om)
        - 0.2037 * sind(2.0 * lm)
        + (0.1261 - 0.00031 * t) * sind(m)
        + 0.0675 * sind(mm)
        - (0.0497 - 0.00012 * t) * sind(2.0 * l + m)
        - 0.0342 * sind(2.0 * lm - om)
        - 0.0261 * sind(2.0 * lm + mm)
        + 0.0214 * sind(2.0 * l - m)
        - 0.0149 * sind(2.0 * l - 2.0 * lm + mm)
        + 0.0124 * sind(2.0 * l - om)
        + 0.0114 * sind(2.0 * lm - mm);

    let delta_epsilon = (9.2100 + 0.00091 * t) * cosd(om)
        + (0.5522 - 0.00029 * t) * cosd(2.0 * l)
        - 0.0904 * cosd(2.0 * om)
        + 0.0884 * cosd(2.0 * lm)
        + 0.0216 * cosd(2.0 * l + m)
        + 0.0183 * cosd(2.0 * lm - om)
        + 0.0113 * cosd(2.0 * lm + mm)
        - 0.0093 * cosd(2.0 * l - m)
        - 0.0066 * cosd(2.0 * l - om);

    NutationResult {
        delta_psi,
        delta_epsilon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use crate::time::civil_to_julian;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_obliquity_at_j2000() {
        assert_relative_eq!(obliquity(J2000), 23.439_291_1, epsilon = 1e-12);
        assert_relative_eq!(obliquity_laskar(J2000), 23.439_291_1, epsilon = 1e-7);
    }

    #[test]
    fn test_obliquity_models_agree_near_j2000() {
        let jd = civil_to_julian(1987, 4, 10.0);
        assert_relative_eq!(obliquity(jd), 23.440_946_48, epsilon = 1e-8);
        assert_relative_eq!(obliquity(jd), obliquity_laskar(jd), epsilon = 1.0 / 3600.0);
    }

    #[test]
    fn test_nutation_1987_april_10() {
        let jd = civil_to_julian(1987, 4, 10.0);
        let nut = nutation(jd);
        assert_relative_eq!(nut.delta_psi, -3.788, epsilon = 5e-4);
        assert_relative_eq!(nut.delta_epsilon, 9.443, epsilon = 5e-4);
    }

    #[rstest]
    #[case(NutationModel::Abridged, 0.5)]
    #[case(NutationModel::Legacy1900, 0.1)]
    fn test_lower_precision_models(#[case] model: NutationModel, #[case] tolerance: f64) {
        for jd in [
            civil_to_julian(1900, 1, 1.0),
            civil_to_julian(1987, 4, 10.0),
            civil_to_julian(2024, 9, 1.0),
        ] {
            let full = nutation(jd);
            let approx = model.nutation(jd);
            assert_relative_eq!(approx.delta_psi, full.delta_psi, epsilon = tolerance);
            assert_relative_eq!(approx.delta_epsilon, full.delta_epsilon, epsilon = tolerance);
        }
    }

    #[test]
    fn test_true_obliquity() {
        let jd = civil_to_julian(1987, 4, 10.0);
        let eps = true_obliquity(jd, ObliquityModel::Cubic, NutationModel::Full);
        // 23 deg 26' 36.850"
        assert_relative_eq!(eps, 23.443_569, epsilon = 1e-5);
    }

    #[test]
    fn test_fundamental_arguments_1987() {
        let t = (civil_to_julian(1987, 4, 10.0) - J2000) / 36_525.0;
        let fa = fundamental_arguments(t);
        assert_relative_eq!(fa.omega.rem_euclid(360.0), 11.2531, epsilon = 1e-4);
        assert_relative_eq!(fa.d.rem_euclid(360.0), 136.9623, epsilon = 1e-4);
    }

    #[test]
    fn test_model_serde_names() {
        let json = serde_json::to_string(&NutationModel::Legacy1900).unwrap();
        assert_eq!(json, "\"legacy1900\"");
        let model: ObliquityModel = serde_json::from_str("\"laskar\"").unwrap();
        assert_eq!(model, ObliquityModel::Laskar);
    }
}
