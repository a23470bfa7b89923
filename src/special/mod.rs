//! Special functions needed by the weight normalisations of the Gauss rules.
//!
//! Only the gamma family is provided: the Jacobi and generalized Laguerre
//! weights are scaled by ratios of gamma functions, which are formed in log
//! space with [`ln_gamma`] so that large node counts and shape parameters do
//! not overflow.
//!
//! # Example
//!
//! ```
//! use quadris::special::{gamma, ln_gamma};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-10);
//!
//! // ln Γ(171) is finite although Γ(171) overflows
//! assert!(ln_gamma(171.5_f64).is_finite());
//! ```

use crate::traits::{c, FloatScalar};


/// Lanczos parameter g (Godfrey's g = 7, n = 9 set).
const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// ln Γ(z + 1) for z ≥ −0.5, straight from the Lanczos series.
fn lanczos_ln_gamma_1p<T: FloatScalar>(z: T) -> T {
    let series = LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(c::<T>(LANCZOS_COEFFS[0]), |acc, (i, &ci)| {
            acc + c::<T>(ci) / (z + T::from(i + 1).unwrap())
        });
    let half = c::<T>(0.5);
    let t = z + c::<T>(LANCZOS_G) + half;
    c::<T>(0.5 * core::f64::consts::TAU.ln()) + (z + half) * t.ln() - t + series.ln()
}

/// Natural logarithm of |Γ(x)|.
///
/// Lanczos approximation in log space for x ≥ 0.5, reflection formula
/// below. Poles (0, −1, −2, …) give +∞, NaN passes through.
pub fn ln_gamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x <= T::zero() && x == x.floor() {
        return T::infinity();
    }
    if x < c(0.5) {
        let pi = c::<T>(core::f64::consts::PI);
        let s = (pi * x).sin().abs();
        return pi.ln() - s.ln() - ln_gamma(T::one() - x);
    }
    lanczos_ln_gamma_1p(x - T::one())
}

/// Gamma function Γ(x).
///
/// Evaluated as `exp(ln_gamma(x))` with the sign restored from the
/// reflection formula for negative non-integer arguments.
pub fn gamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x <= T::zero() && x == x.floor() {
        return T::infinity();
    }
    let magnitude = ln_gamma(x).exp();
    // Γ alternates sign between consecutive negative poles.
    if x < T::zero() && (x.floor() % c(2.0)) != T::zero() {
        -magnitude
    } else {
        magnitude
    }
}
