//! Gaussian quadrature rules: nodes and weights of classical weight functions.
//!
//! A rule of order `n` approximates
//!
//! ```text
//!  b                    n
//! ∫ p(x) f(x) dx  ≈    Σ  w_j f(x_j)
//!  a                   j=1
//! ```
//!
//! and is exact for polynomials `f` of degree ≤ 2n−1.
//!
//! # Weight functions
//!
//! | Id | [`WeightFunction`]  | p(x)                     | Domain     |
//! |----|---------------------|--------------------------|------------|
//! | 1  | `Legendre`          | 1                        | [−1, 1]    |
//! | 2  | `Hermite`           | exp(−x²)                 | (−∞, ∞)    |
//! | 3  | `Laguerre`          | x^α exp(−x)              | [0, ∞)     |
//! | 4  | `Jacobi`            | (1−x)^α (1+x)^β          | [−1, 1]    |
//! | 5  | `Chebyshev1`        | 1/√(1−x²)                | [−1, 1]    |
//! | 6  | `Chebyshev2`        | √(1−x²)                  | [−1, 1]    |
//! | 7  | `SqrtRatio`         | √(x/(1−x))               | [0, 1]     |
//! | 8  | `InvSqrtRight`      | 1/√(1−x)                 | [0, 1]     |
//! | 9  | `SqrtRight`         | √(1−x)                   | [0, 1]     |
//!
//! Legendre, Hermite, Jacobi and Laguerre rules are computed by simultaneous
//! Newton iteration on asymptotic initial guesses, using each family's
//! three-term recurrence. The other five rules are closed form.
//!
//! Rules are memoized per `(weight, n, α, β)` by a [`QuadratureTable`].
//!
//! # Example
//!
//! ```
//! use quadris::rules::{qrule, WeightFunction};
//!
//! // ∫_{-1}^{1} x² dx = 2/3
//! let rule = qrule(10, WeightFunction::Legendre, 0.0, 0.0).unwrap();
//! let q = rule.integrate(|x| x * x);
//! assert!((q - 2.0 / 3.0).abs() < 1e-14);
//! ```

mod closed_form;
mod hermite;
mod jacobi;
mod laguerre;
mod legendre;
pub(crate) mod newton;
mod table;


pub use table::{NewtonRules, QuadratureTable, RuleSource};

use crate::error::QuadError;

/// Integration weight p(x) and the canonical domain of its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightFunction {
    /// p(x) = 1 on [−1, 1].
    Legendre,
    /// p(x) = exp(−x²) on (−∞, ∞).
    Hermite,
    /// p(x) = x^α exp(−x) on [0, ∞).
    Laguerre,
    /// p(x) = (1−x)^α (1+x)^β on [−1, 1].
    Jacobi,
    /// p(x) = 1/√(1−x²) on [−1, 1].
    Chebyshev1,
    /// p(x) = √(1−x²) on [−1, 1].
    Chebyshev2,
    /// p(x) = √(x/(1−x)) on [0, 1].
    SqrtRatio,
    /// p(x) = 1/√(1−x) on [0, 1].
    InvSqrtRight,
    /// p(x) = √(1−x) on [0, 1].
    SqrtRight,
}

impl WeightFunction {
    /// All weight functions, in id order.
    pub const ALL: [WeightFunction; 9] = [
        WeightFunction::Legendre,
        WeightFunction::Hermite,
        WeightFunction::Laguerre,
        WeightFunction::Jacobi,
        WeightFunction::Chebyshev1,
        WeightFunction::Chebyshev2,
        WeightFunction::SqrtRatio,
        WeightFunction::InvSqrtRight,
        WeightFunction::SqrtRight,
    ];

    /// Look up a weight function by its classic integer id (1..=9).
    pub fn from_id(id: i32) -> Result<Self, QuadError> {
        usize::try_from(id - 1)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(QuadError::UnknownWeightFunction(id))
    }

    /// Classic integer id (1..=9).
    pub fn id(self) -> i32 {
        match self {
            Self::Legendre => 1,
            Self::Hermite => 2,
            Self::Laguerre => 3,
            Self::Jacobi => 4,
            Self::Chebyshev1 => 5,
            Self::Chebyshev2 => 6,
            Self::SqrtRatio => 7,
            Self::InvSqrtRight => 8,
            Self::SqrtRight => 9,
        }
    }

    /// Canonical integration domain of the rule.
    pub fn domain(self) -> (f64, f64) {
        match self {
            Self::Legendre | Self::Jacobi | Self::Chebyshev1 | Self::Chebyshev2 => (-1.0, 1.0),
            Self::Hermite => (f64::NEG_INFINITY, f64::INFINITY),
            Self::Laguerre => (0.0, f64::INFINITY),
            Self::SqrtRatio | Self::InvSqrtRight | Self::SqrtRight => (0.0, 1.0),
        }
    }

    /// Whether p(x) is even about the domain centre, so that nodes come in
    /// mirrored pairs with equal weights.
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            Self::Legendre | Self::Hermite | Self::Chebyshev1 | Self::Chebyshev2
        )
    }

    /// Whether the rule depends on the shape parameter α.
    pub fn uses_alpha(self) -> bool {
        matches!(self, Self::Laguerre | Self::Jacobi)
    }

    /// Whether the rule depends on the shape parameter β.
    pub fn uses_beta(self) -> bool {
        matches!(self, Self::Jacobi)
    }

    /// Reject shape parameters outside the family's admissible range.
    pub fn validate(self, alpha: f64, beta: f64) -> Result<(), QuadError> {
        if self.uses_alpha() && !(alpha > -1.0) {
            return Err(QuadError::InvalidParameter("alpha must be greater than -1"));
        }
        if self.uses_beta() && !(beta > -1.0) {
            return Err(QuadError::InvalidParameter("beta must be greater than -1"));
        }
        Ok(())
    }
}

/// Strategy for the Legendre roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LegendreMethod {
    /// Two fourth-order Taylor corrections per root (Davis & Rabinowitz).
    #[default]
    HighOrder,
    /// Three-term recurrence with Newton updates to a 1e-15 tolerance,
    /// at most 100 sweeps.
    Recurrence,
}

/// A fixed set of `(node, weight)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    pub nodes: Vec<f64>,
    pub weights: Vec<f64>,
}

impl QuadratureRule {
    pub fn new(nodes: Vec<f64>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(nodes.len(), weights.len());
        Self { nodes, weights }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over `(node, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }

    /// Σ w_j f(x_j), summed in ascending node index.
    pub fn integrate(&self, mut f: impl FnMut(f64) -> f64) -> f64 {
        self.iter().fold(0.0, |acc, (x, w)| acc + w * f(x))
    }

    /// Sum of the weights: the weighted measure of the domain.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Map a rule on [−1, 1] linearly onto [a, b], scaling the weights by
    /// the Jacobian (b − a)/2.
    pub fn reseat(&self, a: f64, b: f64) -> Self {
        let dh = (b - a) / 2.0;
        Self {
            nodes: self.nodes.iter().map(|&x| dh * (x + 1.0) + a).collect(),
            weights: self.weights.iter().map(|&w| w * dh).collect(),
        }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for QuadratureRule {
    fn from((nodes, weights): (Vec<f64>, Vec<f64>)) -> Self {
        Self::new(nodes, weights)
    }
}

fn check_order(n: usize) -> Result<(), QuadError> {
    if n == 0 {
        return Err(QuadError::InvalidParameter("number of nodes must be positive"));
    }
    Ok(())
}

/// Gauss-Legendre rule of order `n`, mapped onto [a, b].
///
/// # Example
///
/// ```
/// use quadris::rules::{p_roots, LegendreMethod};
///
/// // ∫_0^3 exp(x) dx = e³ − 1
/// let rule = p_roots(11, LegendreMethod::HighOrder, 0.0, 3.0).unwrap();
/// let q = rule.integrate(f64::exp);
/// assert!((q - 19.085536923187668).abs() < 1e-12);
/// ```
pub fn p_roots(n: usize, method: LegendreMethod, a: f64, b: f64) -> Result<QuadratureRule, QuadError> {
    check_order(n)?;
    let rule = QuadratureRule::from(match method {
        LegendreMethod::HighOrder => legendre::high_order(n),
        LegendreMethod::Recurrence => legendre::recurrence(n),
    });
    if a != -1.0 || b != 1.0 {
        return Ok(rule.reseat(a, b));
    }
    Ok(rule)
}

/// Gauss-Hermite rule of order `n` for p(x) = exp(−x²).
pub fn h_roots(n: usize) -> Result<QuadratureRule, QuadError> {
    check_order(n)?;
    Ok(hermite::roots(n).into())
}

/// Gauss-Jacobi rule of order `n` for p(x) = (1−x)^α (1+x)^β, α, β > −1.
pub fn j_roots(n: usize, alpha: f64, beta: f64) -> Result<QuadratureRule, QuadError> {
    WeightFunction::Jacobi.validate(alpha, beta)?;
    check_order(n)?;
    Ok(jacobi::roots(n, alpha, beta).into())
}

/// Generalized Gauss-Laguerre rule of order `n` for p(x) = x^α exp(−x), α > −1.
pub fn la_roots(n: usize, alpha: f64) -> Result<QuadratureRule, QuadError> {
    WeightFunction::Laguerre.validate(alpha, 0.0)?;
    check_order(n)?;
    Ok(laguerre::roots(n, alpha).into())
}

/// Rule of order `n` for any weight function, computed afresh.
///
/// `alpha` is used by Laguerre and Jacobi, `beta` by Jacobi only. Legendre
/// roots (also used by the `InvSqrtRight` and `SqrtRight` rules) come from
/// [`LegendreMethod::HighOrder`]; use [`qrule_with`] to choose.
pub fn qrule(n: usize, weight: WeightFunction, alpha: f64, beta: f64) -> Result<QuadratureRule, QuadError> {
    qrule_with(n, weight, alpha, beta, LegendreMethod::default())
}

/// [`qrule`] with an explicit Legendre strategy.
pub fn qrule_with(
    n: usize,
    weight: WeightFunction,
    alpha: f64,
    beta: f64,
    method: LegendreMethod,
) -> Result<QuadratureRule, QuadError> {
    weight.validate(alpha, beta)?;
    check_order(n)?;
    let (x, w) = match weight {
        WeightFunction::Legendre => return p_roots(n, method, -1.0, 1.0),
        WeightFunction::Hermite => hermite::roots(n),
        WeightFunction::Laguerre => laguerre::roots(n, alpha),
        WeightFunction::Jacobi => jacobi::roots(n, alpha, beta),
        WeightFunction::Chebyshev1 => closed_form::chebyshev_first(n),
        WeightFunction::Chebyshev2 => closed_form::chebyshev_second(n),
        WeightFunction::SqrtRatio => closed_form::sqrt_ratio(n),
        WeightFunction::InvSqrtRight => closed_form::inverse_sqrt(n, method),
        WeightFunction::SqrtRight => closed_form::sqrt_weight(n, method),
    };
    Ok(QuadratureRule::new(x, w))
}
