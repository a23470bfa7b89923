//! Sequence acceleration shared by the extrapolating integrators.

use crate::traits::{c, FloatScalar, QuadScalar};
use num_traits::Float;

/// Three-point epsilon-algorithm extrapolation of a converging sequence.
///
/// Given three successive estimates `v0, v1, v2`, returns the extrapolated
/// limit and an estimate of its absolute error. When both differences are
/// already at rounding level the last estimate is returned as is.
///
/// # Example
///
/// ```
/// use quadris::integrate::dea3;
///
/// // Partial sums of 1 - 1/2 + 1/3 - ... → ln 2
/// let s: Vec<f64> = (1..=12)
///     .scan(0.0, |acc, k| {
///         *acc += (-1.0_f64).powi(k + 1) / k as f64;
///         Some(*acc)
///     })
///     .collect();
/// let (limit, err) = dea3(s[9], s[10], s[11]);
/// assert!((limit - 2f64.ln()).abs() < 1e-4);
/// assert!(err > (limit - 2f64.ln()).abs());
/// ```
pub fn dea3<T: FloatScalar>(v0: T, v1: T, v2: T) -> (T, T) {
    let eps = T::epsilon();
    let ten = c::<T>(10.0);

    let delta2 = v2 - v1;
    let delta1 = v1 - v0;
    let err2 = delta2.abs();
    let err1 = delta1.abs();
    let tol2 = v2.abs().max(v1.abs()) * eps;
    let tol1 = v1.abs().max(v0.abs()) * eps;

    if err1 <= tol1 && err2 <= tol2 {
        return (v2, err1 + err2 + ten * tol2);
    }

    let ss = T::one() / delta2 - T::one() / delta1 + T::min_positive_value();
    if (ss * v1).abs() <= c::<T>(1e-3) {
        return (v2, err1 + err2 + ten * tol2);
    }

    let result = v1 + T::one() / ss;
    (result, err1 + err2 + (result - v2).abs())
}

/// Richardson extrapolation of `q[k]` with an estimated convergence rate.
///
/// The rate is taken from the last three entries of `q`,
/// `c = Re((q[k-1] - q[k-2]) / (q[k] - q[k-1])) - 1`, and bounded below by
/// 0.07 so that endpoint singularities as strong as `x^-0.9` are still
/// accelerated. Needs `k >= 2`.
pub fn richardson<T: QuadScalar>(q: &[T], k: usize) -> T {
    let step = q[k] - q[k - 1];
    let rate = ((q[k - 1] - q[k - 2]) / step).re() - <T::Real as num_traits::One>::one();
    // NaN (from a zero step) compares false and falls back to the bound.
    let floor = c::<T::Real>(0.07);
    let rate = if rate > floor { rate } else { floor };
    q[k] + step.scale(rate.recip())
}
