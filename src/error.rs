//! Error type shared by the rule builders and the integrators.

use thiserror::Error;

/// Hard failures: rejected input, raised before any iteration starts.
///
/// Numerical non-convergence is never an error. It is reported through the
/// `converged` flags on the result types and a `log::warn!` record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadError {
    /// A shape parameter, node count, tolerance or limit is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// Weight function id outside `1..=9`.
    #[error("unknown weight function id {0}")]
    UnknownWeightFunction(i32),
    /// Tabulated abscissas do not match the Chebyshev points of the interval.
    #[error("abscissas must equal cos(pi*k/n)*(b-a)/2+(b+a)/2")]
    AbscissaMismatch,
    /// An improper integral was given a bound that is not a real number.
    #[error("infinite intervals must have real limits")]
    NonRealBound,
    /// Limits and extra arguments cannot be broadcast to a common shape.
    #[error("shapes {0:?} and {1:?} cannot be broadcast together")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}
