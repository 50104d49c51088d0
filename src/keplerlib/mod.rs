//! Kepler's equation for elliptic orbits
//!
//! `E = M + e sin E` is solved by Newton-Raphson iteration starting from
//! `E = M`. All angles here are radians.

use crate::constants::DEG2RAD;
use log::debug;
use serde::{Deserialize, Serialize};

/// Stop once a Newton step is smaller than a millionth of a degree
const ACCURACY: f64 = 1e-6 * DEG2RAD;

/// Give up after this many steps
const MAX_ITERATIONS: u32 = 40;

/// Result of solving Kepler's equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians
    pub eccentric_anomaly: f64,
    /// Newton steps taken
    pub iterations: u32,
    /// False when the iteration cap was reached first
    pub converged: bool,
}

/// Solve Kepler's equation for mean anomaly `m` (radians) and eccentricity `e`
///
/// When the cap is reached the last iterate is returned with
/// `converged == false`. Near `e = 1` the iteration from `E = M` can
/// diverge, so an unconverged iterate may be arbitrarily far from the root
/// and should not be used as an approximation.
pub fn solve_kepler(m: f64, e: f64) -> KeplerSolution {
    let mut ea = m;

    for i in 1..=MAX_ITERATIONS {
        let delta = (m + e * ea.sin() - ea) / (1.0 - e * ea.cos());
        ea += delta;
        if delta.abs() <= ACCURACY {
            return KeplerSolution {
                eccentric_anomaly: ea,
                iterations: i,
                converged: true,
            };
        }
    }

    debug!(
        "Kepler iteration did not converge: M = {}, e = {}, E = {}",
        m, e, ea
    );
    KeplerSolution {
        eccentric_anomaly: ea,
        iterations: MAX_ITERATIONS,
        converged: false,
    }
}

/// Eccentric anomaly in radians, discarding the convergence report
pub fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    solve_kepler(m, e).eccentric_anomaly
}

/// True anomaly in radians from the eccentric anomaly of an ellipse
pub fn true_anomaly(ea: f64, e: f64) -> f64 {
    2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea / 2.0).tan()).atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(5.0 * DEG2RAD, 0.1, 0.096_945_871_075_967_08, 3)]
    #[case(3.0, 0.5, 3.047_150_774_702_394_5, 3)]
    #[case(0.3, 0.99, 1.234_564_589_808_617_3, 13)]
    fn test_known_solutions(
        #[case] m: f64,
        #[case] e: f64,
        #[case] expected: f64,
        #[case] iterations: u32,
    ) {
        let sol = solve_kepler(m, e);
        assert!(sol.converged);
        assert_eq!(sol.iterations, iterations);
        assert_relative_eq!(sol.eccentric_anomaly, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit() {
        let sol = solve_kepler(1.234, 0.0);
        assert!(sol.converged);
        assert_eq!(sol.iterations, 1);
        assert_eq!(sol.eccentric_anomaly, 1.234);
    }

    #[test]
    fn test_residual() {
        let mut rng = StdRng::seed_from_u64(1604);

        for _ in 0..10_000 {
            let e = rng.gen_range(0.0..0.95);
            let m = rng.gen_range(-2.0 * PI..2.0 * PI);
            let sol = solve_kepler(m, e);
            let ea = sol.eccentric_anomaly;
            let residual = m - (ea - e * ea.sin());
            assert!(sol.converged, "M = {m}, e = {e}");
            assert!(residual.abs() < 1e-5, "Kepler residual = {residual}");
        }
    }

    #[test]
    fn test_near_parabolic_failures_are_flagged() {
        let mut rng = StdRng::seed_from_u64(1609);
        let mut converged = 0;

        for _ in 0..20_000 {
            let e = rng.gen_range(0.95..1.0);
            let m = rng.gen_range(-PI..PI);
            let sol = solve_kepler(m, e);
            let ea = sol.eccentric_anomaly;
            let residual = m - (ea - e * ea.sin());
            if sol.converged {
                converged += 1;
                assert!(residual.abs() < 1e-5, "M = {m}, e = {e}, residual = {residual}");
            } else {
                assert_eq!(sol.iterations, MAX_ITERATIONS);
            }
        }
        assert!(converged > 10_000, "only {converged} solves converged");
    }

    #[test]
    fn test_degenerate_orbit_reports_failure() {
        // e = 1 at perihelion makes the Newton step 0/0
        let sol = solve_kepler(0.0, 1.0);
        assert!(!sol.converged);
        assert_eq!(sol.iterations, MAX_ITERATIONS);
    }

    #[test]
    fn test_true_anomaly() {
        // Meeus example: M = 5 deg, e = 0.1
        let ea = eccentric_anomaly(5.0 * DEG2RAD, 0.1);
        assert_relative_eq!(true_anomaly(ea, 0.1), 0.107_159_053_825_920_23, epsilon = 1e-12);
        assert_eq!(true_anomaly(0.0, 0.5), 0.0);
        assert_relative_eq!(true_anomaly(0.8, 0.0), 0.8, epsilon = 1e-12);
    }
}
