//! Perturbations of Uranus by Jupiter, Saturn and Neptune
//!
//! The unperturbed elements of Uranus are too poor to be useful on their
//! own. The mean anomaly, eccentricity and semi-major axis are corrected
//! before solving the orbit, then the heliocentric longitude, latitude and
//! radius vector are corrected afterwards. The auxiliary angles combine the
//! mean longitudes of Jupiter (P), Saturn (Q), Uranus (S) and Neptune (G).

use super::{compute_heliocentric, orbital_elements, Body, BodyState};
use crate::constants::DEG2RAD;
use crate::coordinates::angle::limit_angle;
use crate::time::{Epoch, JulianDate};

/// Heliocentric state of Uranus including perturbations
pub fn uranus_state(jd: JulianDate) -> BodyState {
    let t = Epoch::J1900.centuries(jd);
    let u = t / 5.0 + 0.1;

    let p = (237.475_55 + 3_034.906_1 * t) * DEG2RAD;
    let q = (265.916_50 + 1_222.113_9 * t) * DEG2RAD;
    let s = (243.517_21 + 428.467_7 * t) * DEG2RAD;
    let w = 2.0 * p - 6.0 * q + 3.0 * s;
    let g = (83.769_22 + 218.490_1 * t) * DEG2RAD;
    let h = 2.0 * g - s;

    let tau = s - p;
    let mu = s - q;
    let theta = g - s;

    let (sin, cos) = (f64::sin, f64::cos);

    let a = (0.864_319 - 0.001_583 * u) * sin(h)
        + (0.082_222 - 0.006_833 * u) * cos(h)
        + 0.036_017 * sin(2.0 * h)
        - 0.003_019 * cos(2.0 * h)
        + 0.008_122 * sin(w);
    let b = 0.120_303 * sin(h) + (0.019_472 - 0.000_947 * u) * cos(h) + 0.006_197 * sin(2.0 * h);

    let mut elements = orbital_elements(Body::Uranus, jd);
    elements.mean_anomaly = limit_angle(elements.mean_anomaly + a - b / elements.eccentricity);
    elements.eccentricity +=
        ((-3_349.0 + 163.0 * u) * sin(h) + 20_981.0 * cos(h) + 1_311.0 * cos(2.0 * h)) * 1e-7;
    elements.semi_major_axis -= 0.003_825 * cos(h);

    let mut state = compute_heliocentric(&elements);

    let d_lon = (0.012_122 - 0.000_988 * u) * sin(s + mu)
        + (-0.038_581 + 0.002_031 * u - 0.001_910 * u * u) * cos(s + mu)
        + (0.034_964 - 0.001_038 * u + 0.000_868 * u * u) * cos(2.0 * s + mu)
        + 0.005_594 * sin(s + 3.0 * theta)
        - 0.014_808 * sin(tau)
        - 0.005_794 * sin(mu)
        + 0.002_347 * cos(mu)
        + 0.009_872 * sin(theta)
        + 0.008_803 * sin(2.0 * theta)
        - 0.004_308 * sin(3.0 * theta);

    let d_lat = (0.000_458 * sin(mu) - 0.000_642 * cos(mu) - 0.000_517 * cos(4.0 * theta)) * sin(s)
        - (0.000_347 * sin(mu) + 0.000_853 * cos(mu) + 0.000_517 * sin(4.0 * mu)) * cos(s)
        + 0.000_403 * (cos(2.0 * theta) * sin(2.0 * s) + sin(2.0 * theta) * cos(2.0 * s));

    let d_r = -25_948.0
        + (5_795.0 * cos(s) - 1_165.0 * sin(s) + 1_388.0 * cos(2.0 * s)) * sin(mu)
        + 4_985.0 * cos(tau)
        + (1_351.0 * cos(s) + 5_702.0 * sin(s) + 1_388.0 * sin(2.0 * s)) * cos(mu)
        - 1_230.0 * cos(s)
        + 904.0 * cos(2.0 * theta)
        + 3_354.0 * cos(mu)
        + 894.0 * (cos(theta) - cos(3.0 * theta));

    state.position.lon = limit_angle(state.position.lon + d_lon);
    state.position.lat += d_lat;
    state.position.r += d_r * 1e-6;
    state
}
