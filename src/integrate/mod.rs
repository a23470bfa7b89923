//! Integrators: Clenshaw-Curtis, Romberg, adaptive Gauss and Gauss-Legendre
//! with Richardson extrapolation.
//!
//! | Function             | Limits               | Values          | Method                                   |
//! |----------------------|----------------------|-----------------|------------------------------------------|
//! | [`clencurt`]         | batched, finite      | `f64`           | 2n+1 Chebyshev points, cosine transform  |
//! | [`clencurt_samples`] | scalar, finite       | tabulated       | same, on a table of samples              |
//! | [`romberg`]          | scalar, finite       | `f32`/`f64`     | trapezoid doubling + extrapolation table |
//! | [`gaussq`]           | batched, per-weight  | `f64`           | node doubling with cached Gauss rules    |
//! | [`quadgr`]           | scalar, may be ±∞    | real or complex | 12-point Gauss-Legendre, bisection       |
//!
//! Non-convergence is never an `Err`. Each result carries a `converged` flag
//! (or an unconverged count for batches) and a `log::warn!` record is emitted.
//! Only rejected input produces a [`QuadError`](crate::QuadError).
//!
//! # Example
//!
//! ```
//! use quadris::integrate::{quadgr, QuadgrSettings};
//!
//! // ∫_0^∞ cos(x) e^{-x} dx = 1/2
//! let settings = QuadgrSettings { abs_tol: 1e-9, ..Default::default() };
//! let r = quadgr(|x: f64| x.cos() * (-x).exp(), 0.0, f64::INFINITY, &settings).unwrap();
//! assert!((r.value - 0.5).abs() < 1e-9);
//! assert!(r.converged);
//! ```

mod broadcast;
mod clenshaw_curtis;
mod extrapolate;
mod gaussq;
mod integrand;
mod quadgr;
mod romberg;

#[cfg(test)]
mod tests;

pub use clenshaw_curtis::{clencurt, clencurt_samples};
pub use extrapolate::{dea3, richardson};
pub use gaussq::{gaussq, gaussq_with_table, GaussSettings};
pub use integrand::{Integrand, Vectorized, WithArgs};
pub use quadgr::{quadgr, QuadgrSettings};
pub use romberg::{romberg, RombergSettings};

use ndarray::ArrayD;

use crate::traits::QuadScalar;

/// Result of a scalar integrator.
#[derive(Debug, Clone, Copy)]
pub struct QuadResult<T: QuadScalar> {
    /// Integral estimate.
    pub value: T,
    /// Estimated absolute error of `value`.
    pub error: T::Real,
    /// Number of refinement passes performed.
    pub iterations: usize,
    /// Number of integrand evaluations.
    pub evals: usize,
    /// `true` when the error estimate met the requested tolerance.
    pub converged: bool,
}

impl<T: QuadScalar> QuadResult<T> {
    /// The integral over an empty interval.
    fn empty() -> Self {
        Self {
            value: T::zero(),
            error: <T::Real as num_traits::Zero>::zero(),
            iterations: 0,
            evals: 0,
            converged: true,
        }
    }
}

/// Result of [`gaussq`] / [`gaussq_with_table`].
///
/// `values` and `errors` have the broadcast shape of the limits and extra
/// arguments, promoted to at least one dimension.
#[derive(Debug, Clone)]
pub struct GaussSolution {
    /// Integral estimates.
    pub values: ArrayD<f64>,
    /// Absolute change between the last two estimates of each problem.
    pub errors: ArrayD<f64>,
    /// Number of refinement passes performed.
    pub iterations: usize,
    /// Node count of the last rule used.
    pub nodes: usize,
    /// Number of integrand evaluations over all problems.
    pub evals: usize,
    /// Number of problems still above tolerance when the pass cap was hit.
    pub unconverged: usize,
}

impl GaussSolution {
    /// `true` when every problem met its tolerance.
    pub fn converged(&self) -> bool {
        self.unconverged == 0
    }
}

/// Result of [`clencurt`] / [`clencurt_samples`].
#[derive(Debug, Clone)]
pub struct ClenshawCurtisSolution {
    /// Integral estimates, one per problem (or per tabulated column).
    pub values: ArrayD<f64>,
    /// Magnitude of the last retained Chebyshev coefficient, scaled by the
    /// interval length.
    pub errors: ArrayD<f64>,
    /// Number of integrand evaluations (0 for tabulated input).
    pub evals: usize,
}
