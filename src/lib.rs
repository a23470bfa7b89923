//! # quadris
//!
//! Numerical quadrature in pure Rust: Gaussian rules for nine weight
//! functions built by Newton iteration, a memoized rule table, and four
//! integrators (Clenshaw-Curtis, Romberg, adaptive Gauss and Gauss-Legendre
//! with Richardson extrapolation).
//!
//! ## Quick start
//!
//! ```
//! use quadris::rules::{qrule, WeightFunction};
//! use quadris::integrate::{quadgr, QuadgrSettings};
//!
//! // A 10-point Gauss-Legendre rule integrates x² over [-1, 1] exactly
//! let rule = qrule(10, WeightFunction::Legendre, 0.0, 0.0).unwrap();
//! assert!((rule.integrate(|x| x * x) - 2.0 / 3.0).abs() < 1e-14);
//!
//! // ∫_{-∞}^{∞} exp(-x²) dx = √π
//! let settings = QuadgrSettings { abs_tol: 1e-9, ..Default::default() };
//! let r = quadgr(|x: f64| (-x * x).exp(), f64::NEG_INFINITY, f64::INFINITY, &settings).unwrap();
//! assert!((r.value - std::f64::consts::PI.sqrt()).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`rules`]: nodes and weights of Gaussian rules. [`rules::p_roots`],
//!   [`rules::h_roots`], [`rules::j_roots`] and [`rules::la_roots`] for the
//!   classical families, [`rules::qrule`] for all nine
//!   [`WeightFunction`]s, and [`QuadratureTable`], a thread-safe memo of
//!   rules keyed by weight, order and shape parameters.
//!
//! - [`integrate`]: [`integrate::clencurt`] and
//!   [`integrate::clencurt_samples`], [`integrate::romberg`],
//!   [`integrate::gaussq`] (batched, with numpy-style broadcasting of limits
//!   and extra arguments over `ndarray` arrays) and [`integrate::quadgr`]
//!   (infinite limits, endpoint singularities, complex values). The
//!   extrapolation helpers [`integrate::dea3`] and [`integrate::richardson`]
//!   are exported as well.
//!
//! - [`special`]: [`special::ln_gamma`] and [`special::gamma`].
//!
//! - [`traits`]: element traits.
//!   - [`Scalar`]: any integrand value (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`]: real floats, used for limits and tolerances
//!   - [`QuadScalar`]: real floats and complex numbers, with a real part type
//!
//! - [`error`]: [`QuadError`], returned only for rejected input. Failure to
//!   converge is reported on the result and through `log::warn!`.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `warn`
//! for non-convergence, `debug` when a rule is computed and cached. Install
//! any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `complex` | no      | `Complex<f32>` / `Complex<f64>` integrands in `quadgr` via `num-complex` |
//! | `all`     | no      | All features |

pub mod error;
pub mod integrate;
pub mod rules;
pub mod special;
pub mod traits;

pub use error::QuadError;
pub use integrate::{ClenshawCurtisSolution, GaussSolution, QuadResult};
pub use rules::{LegendreMethod, QuadratureRule, QuadratureTable, WeightFunction};
pub use traits::{FloatScalar, QuadScalar, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
