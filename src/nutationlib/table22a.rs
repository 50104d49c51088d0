//! Periodic terms for nutation in longitude and obliquity
//!
//! Each row: multipliers of D, M, M', F, Omega, then the coefficients of
//! delta-psi (constant, per century) and delta-epsilon (constant, per
//! century) in units of 0.0001 arcsecond. Terms are ordered by decreasing
//! amplitude of delta-psi.

/// Units of the coefficient columns, in arcseconds
pub const COEFF_UNIT: f64 = 1e-4;

/// One periodic term
#[derive(Debug, Clone, Copy)]
pub struct NutationTerm {
    pub multipliers: [i8; 5],
    pub psi: [f64; 2],
    pub eps: [f64; 2],
}

const fn term(multipliers: [i8; 5], psi: [f64; 2], eps: [f64; 2]) -> NutationTerm {
    NutationTerm {
        multipliers,
        psi,
        eps,
    }
}

#[rustfmt::skip]
pub const TERMS: [NutationTerm; 63] = [
    term([ 0,  0,  0,  0,  1], [-171996.0, -174.2], [92025.0,  8.9]),
    term([-2,  0,  0,  2,  2], [ -13187.0,   -1.6], [ 5736.0, -3.1]),
    term([ 0,  0,  0,  2,  2], [  -2274.0,   -0.2], [  977.0, -0.5]),
    term([ 0,  0,  0,  0,  2], [   2062.0,    0.2], [ -895.0,  0.5]),
    term([ 0,  1,  0,  0,  0], [   1426.0,   -3.4], [   54.0, -0.1]),
    term([ 0,  0,  1,  0,  0], [    712.0,    0.1], [   -7.0,  0.0]),
    term([-2,  1,  0,  2,  2], [   -517.0,    1.2], [  224.0, -0.6]),
    term([ 0,  0,  0,  2,  1], [   -386.0,   -0.4], [  200.0,  0.0]),
    term([ 0,  0,  1,  2,  2], [   -301.0,    0.0], [  129.0, -0.1]),
    term([-2, -1,  0,  2,  2], [    217.0,   -0.5], [  -95.0,  0.3]),
    term([-2,  0,  1,  0,  0], [   -158.0,    0.0], [    0.0,  0.0]),
    term([-2,  0,  0,  2,  1], [    129.0,    0.1], [  -70.0,  0.0]),
    term([ 0,  0, -1,  2,  2], [    123.0,    0.0], [  -53.0,  0.0]),
    term([ 2,  0,  0,  0,  0], [     63.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0,  1,  0,  1], [     63.0,    0.1], [  -33.0,  0.0]),
    term([ 2,  0, -1,  2,  2], [    -59.0,    0.0], [   26.0,  0.0]),
    term([ 0,  0, -1,  0,  1], [    -58.0,   -0.1], [   32.0,  0.0]),
    term([ 0,  0,  1,  2,  1], [    -51.0,    0.0], [   27.0,  0.0]),
    term([-2,  0,  2,  0,  0], [     48.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0, -2,  2,  1], [     46.0,    0.0], [  -24.0,  0.0]),
    term([ 2,  0,  0,  2,  2], [    -38.0,    0.0], [   16.0,  0.0]),
    term([ 0,  0,  2,  2,  2], [    -31.0,    0.0], [   13.0,  0.0]),
    term([ 0,  0,  2,  0,  0], [     29.0,    0.0], [    0.0,  0.0]),
    term([-2,  0,  1,  2,  2], [     29.0,    0.0], [  -12.0,  0.0]),
    term([ 0,  0,  0,  2,  0], [     26.0,    0.0], [    0.0,  0.0]),
    term([-2,  0,  0,  2,  0], [    -22.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0, -1,  2,  1], [     21.0,    0.0], [  -10.0,  0.0]),
    term([ 0,  2,  0,  0,  0], [     17.0,   -0.1], [    0.0,  0.0]),
    term([ 2,  0, -1,  0,  1], [     16.0,    0.0], [   -8.0,  0.0]),
    term([-2,  2,  0,  2,  2], [    -16.0,    0.1], [    7.0,  0.0]),
    term([ 0,  1,  0,  0,  1], [    -15.0,    0.0], [    9.0,  0.0]),
    term([-2,  0,  1,  0,  1], [    -13.0,    0.0], [    7.0,  0.0]),
    term([ 0, -1,  0,  0,  1], [    -12.0,    0.0], [    6.0,  0.0]),
    term([ 0,  0,  2, -2,  0], [     11.0,    0.0], [    0.0,  0.0]),
    term([ 2,  0, -1,  2,  1], [    -10.0,    0.0], [    5.0,  0.0]),
    term([ 2,  0,  1,  2,  2], [     -8.0,    0.0], [    3.0,  0.0]),
    term([ 0,  1,  0,  2,  2], [      7.0,    0.0], [   -3.0,  0.0]),
    term([-2,  1,  1,  0,  0], [     -7.0,    0.0], [    0.0,  0.0]),
    term([ 0, -1,  0,  2,  2], [     -7.0,    0.0], [    3.0,  0.0]),
    term([ 2,  0,  0,  2,  1], [     -7.0,    0.0], [    3.0,  0.0]),
    term([ 2,  0,  1,  0,  0], [      6.0,    0.0], [    0.0,  0.0]),
    term([-2,  0,  2,  2,  2], [      6.0,    0.0], [   -3.0,  0.0]),
    term([-2,  0,  1,  2,  1], [      6.0,    0.0], [   -3.0,  0.0]),
    term([ 2,  0, -2,  0,  1], [     -6.0,    0.0], [    3.0,  0.0]),
    term([ 2,  0,  0,  0,  1], [     -6.0,    0.0], [    3.0,  0.0]),
    term([ 0, -1,  1,  0,  0], [      5.0,    0.0], [    0.0,  0.0]),
    term([-2, -1,  0,  2,  1], [     -5.0,    0.0], [    3.0,  0.0]),
    term([-2,  0,  0,  0,  1], [     -5.0,    0.0], [    3.0,  0.0]),
    term([ 0,  0,  2,  2,  1], [     -5.0,    0.0], [    3.0,  0.0]),
    term([-2,  0,  2,  0,  1], [      4.0,    0.0], [    0.0,  0.0]),
    term([-2,  1,  0,  2,  1], [      4.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0,  1, -2,  0], [      4.0,    0.0], [    0.0,  0.0]),
    term([-1,  0,  1,  0,  0], [     -4.0,    0.0], [    0.0,  0.0]),
    term([-2,  1,  0,  0,  0], [     -4.0,    0.0], [    0.0,  0.0]),
    term([ 1,  0,  0,  0,  0], [     -4.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0,  1,  2,  0], [      3.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0, -2,  2,  2], [     -3.0,    0.0], [    0.0,  0.0]),
    term([-1, -1,  1,  0,  0], [     -3.0,    0.0], [    0.0,  0.0]),
    term([ 0,  1,  1,  0,  0], [     -3.0,    0.0], [    0.0,  0.0]),
    term([ 0, -1,  1,  2,  2], [     -3.0,    0.0], [    0.0,  0.0]),
    term([ 2, -1, -1,  2,  2], [     -3.0,    0.0], [    0.0,  0.0]),
    term([ 0,  0,  3,  2,  2], [     -3.0,    0.0], [    0.0,  0.0]),
    term([ 2, -1,  0,  2,  2], [     -3.0,    0.0], [    0.0,  0.0]),
];
