use super::extrapolate::richardson;
use super::QuadResult;
use crate::error::QuadError;
use crate::traits::{c, QuadScalar};
use num_traits::{Float, One, Zero};

/// Positive nodes of the 12-point Gauss-Legendre rule.
const NODES: [f64; 6] = [
    0.12523340851146894,
    0.36783149899818018,
    0.58731795428661748,
    0.76990267419430469,
    0.9041172563704748,
    0.98156063424671924,
];

/// Weights matching [`NODES`]; the rule is symmetric.
const WEIGHTS: [f64; 6] = [
    0.24914704581340288,
    0.23349253653835478,
    0.20316742672306584,
    0.16007832854334636,
    0.10693932599531818,
    0.047175336386511842,
];

const RULE_LEN: usize = 12;

/// Settings for [`quadgr`].
#[derive(Debug, Clone, Copy)]
pub struct QuadgrSettings<T> {
    /// Absolute error tolerance.
    pub abs_tol: T,
    /// Maximum number of bisection passes, at least 2.
    pub max_iter: usize,
}

impl Default for QuadgrSettings<f64> {
    fn default() -> Self {
        Self {
            abs_tol: 1e-5,
            max_iter: 17,
        }
    }
}

impl Default for QuadgrSettings<f32> {
    fn default() -> Self {
        Self {
            abs_tol: 1e-4,
            max_iter: 17,
        }
    }
}

/// Gauss-Legendre quadrature with Richardson extrapolation.
///
/// A 12-point Gauss-Legendre rule is applied to `[a, b]`, then to 2, 4, 8, …
/// equal panels. From the fourth pass on the sequence of panel sums is
/// extrapolated with [`richardson`], and from the sixth pass on the
/// extrapolated sequence is extrapolated again. Each pass keeps the most
/// recent estimate whose change from the previous pass is smallest; that
/// change is the error estimate. Richardson extrapolation makes the method
/// effective on integrands with endpoint singularities.
///
/// Infinite limits are handled by substitution: `x = a + t/(1−t)` on `[0, 1)`
/// for `[a, ∞)`, `x = b + t/(1+t)` on `(−1, 0]` for `(−∞, b]`, and both halves
/// (each with half the tolerance) for `(−∞, ∞)`.
///
/// `f` may return real or, with the `complex` feature, complex values; the
/// limits are always real. `a > b` integrates over `[b, a]` and negates.
/// An empty interval returns zero without evaluating `f`.
///
/// Stops when the error estimate drops below `abs_tol` or the estimate
/// becomes infinite or NaN. The returned error is padded by two machine
/// epsilons so it is never exactly zero.
///
/// # Errors
///
/// [`QuadError::NonRealBound`] if one limit is infinite and the other NaN,
/// [`QuadError::InvalidParameter`] for any other NaN limit or
/// `max_iter < 2`.
///
/// # Example
///
/// ```
/// use quadris::integrate::{quadgr, QuadgrSettings};
///
/// // Integrable singularity at 0: ∫_0^1 x^-0.75 dx = 4
/// let r = quadgr(|x: f64| x.powf(-0.75), 0.0, 1.0, &QuadgrSettings::default()).unwrap();
/// assert!((r.value - 4.0).abs() < 1e-8);
///
/// // ∫_{-∞}^{∞} exp(-x²) dx = √π
/// let settings = QuadgrSettings { abs_tol: 1e-9, ..Default::default() };
/// let r = quadgr(|x: f64| (-x * x).exp(), f64::NEG_INFINITY, f64::INFINITY, &settings).unwrap();
/// assert!((r.value - std::f64::consts::PI.sqrt()).abs() < 1e-9);
/// ```
pub fn quadgr<T, F>(
    mut f: F,
    a: T::Real,
    b: T::Real,
    settings: &QuadgrSettings<T::Real>,
) -> Result<QuadResult<T>, QuadError>
where
    T: QuadScalar,
    F: FnMut(T::Real) -> T,
{
    if settings.max_iter < 2 {
        return Err(QuadError::InvalidParameter("quadgr needs at least 2 iterations"));
    }
    if a.is_nan() || b.is_nan() {
        if a.is_infinite() || b.is_infinite() {
            return Err(QuadError::NonRealBound);
        }
        return Err(QuadError::InvalidParameter("integration limits must not be NaN"));
    }
    if a == b {
        return Ok(QuadResult::empty());
    }

    let (lo, hi, reverse) = if a > b { (b, a, true) } else { (a, b, false) };

    let mut result: QuadResult<T> = if lo.is_infinite() || hi.is_infinite() {
        change_variable(&mut f, lo, hi, settings)
    } else {
        integrate_finite(&mut f, lo, hi, settings.abs_tol, settings.max_iter)
    };

    if reverse {
        result.value = T::zero() - result.value;
    }
    Ok(result)
}

/// Map an improper interval onto a finite one and integrate there.
fn change_variable<T, F>(f: &mut F, a: T::Real, b: T::Real, settings: &QuadgrSettings<T::Real>) -> QuadResult<T>
where
    T: QuadScalar,
    F: FnMut(T::Real) -> T,
{
    let one = T::Real::one();
    let zero = T::Real::zero();
    let max_iter = settings.max_iter;

    if a.is_finite() {
        // a to ∞
        let mut g = |t: T::Real| {
            let s = one - t;
            f(a + t / s).scale((s * s).recip())
        };
        integrate_finite::<T, _>(&mut g, zero, one, settings.abs_tol, max_iter)
    } else if b.is_finite() {
        // −∞ to b
        let mut g = |t: T::Real| {
            let s = one + t;
            f(b + t / s).scale((s * s).recip())
        };
        integrate_finite::<T, _>(&mut g, -one, zero, settings.abs_tol, max_iter)
    } else {
        let tol = settings.abs_tol * c::<T::Real>(0.5);
        let upper = {
            let mut g = |t: T::Real| {
                let s = one - t;
                f(t / s).scale((s * s).recip())
            };
            integrate_finite::<T, _>(&mut g, zero, one, tol, max_iter)
        };
        let lower = {
            let mut g = |t: T::Real| {
                let s = one + t;
                f(t / s).scale((s * s).recip())
            };
            integrate_finite::<T, _>(&mut g, -one, zero, tol, max_iter)
        };
        QuadResult {
            value: upper.value + lower.value,
            error: upper.error + lower.error,
            iterations: upper.iterations.max(lower.iterations),
            evals: upper.evals + lower.evals,
            converged: upper.converged && lower.converged,
        }
    }
}

/// Panel sums on `[a, b]` with successive bisection and extrapolation.
fn integrate_finite<T, F>(f: &mut F, a: T::Real, b: T::Real, abs_tol: T::Real, max_iter: usize) -> QuadResult<T>
where
    T: QuadScalar,
    F: FnMut(T::Real) -> T,
{
    let half = c::<T::Real>(0.5);
    let (xq, wq) = rule::<T::Real>();

    let mut q0 = vec![T::zero(); max_iter];
    let mut q1 = vec![T::zero(); max_iter];
    let mut q2 = vec![T::zero(); max_iter];

    let mut hh = (b - a) * half;
    let mid = (a + b) * half;
    let mut x: Vec<T::Real> = xq.iter().map(|&xi| mid + hh * xi).collect();

    q0[0] = xq
        .iter()
        .zip(&x)
        .zip(&wq)
        .fold(T::zero(), |acc, ((_, &xi), &wi)| acc + f(xi).scale(wi))
        .scale(hh);
    let mut evals = RULE_LEN;

    let mut value = q0[0];
    let mut error = T::Real::infinity();
    let mut stopped = false;
    let mut iterations = 1;

    for k in 1..max_iter {
        iterations = k + 1;
        hh = hh * half;
        x = x
            .iter()
            .map(|&xi| (xi + a) * half)
            .chain(x.iter().map(|&xi| (xi + b) * half))
            .collect();

        // Sum node by node across panels, then weight.
        let mut column = [T::zero(); RULE_LEN];
        for panel in x.chunks(RULE_LEN) {
            for (acc, &xi) in column.iter_mut().zip(panel) {
                *acc = *acc + f(xi);
            }
        }
        evals += x.len();
        q0[k] = column
            .iter()
            .zip(&wq)
            .fold(T::zero(), |acc, (&s, &wi)| acc + s.scale(wi))
            .scale(hh);

        if k >= 5 {
            q1[k] = richardson(&q0, k);
            q2[k] = richardson(&q1, k);
        } else if k >= 3 {
            q1[k] = richardson(&q0, k);
        }

        let (best, err) = best_estimate(&q0, &q1, &q2, k);
        value = best;
        error = err;

        if error < abs_tol || !value.is_finite_value() {
            stopped = true;
            break;
        }
    }

    if !stopped {
        log::warn!("quadgr: maximum number of iterations reached without convergence");
    }
    let finite = value.is_finite_value();
    if !finite {
        log::warn!("quadgr: integral approximation is infinite or NaN");
    }

    QuadResult {
        value,
        error: error + T::Real::epsilon() * c::<T::Real>(2.0),
        iterations,
        evals,
        converged: stopped && finite,
    }
}

/// Among the sequences available at pass `k`, the latest entry with the
/// smallest change from its predecessor.
fn best_estimate<T: QuadScalar>(q0: &[T], q1: &[T], q2: &[T], k: usize) -> (T, T::Real) {
    let available = if k >= 6 {
        3
    } else if k >= 4 {
        2
    } else {
        1
    };
    let sequences = [q0, q1, q2];
    let mut best = (q0[k], (q0[k] - q0[k - 1]).modulus());
    for q in &sequences[1..available] {
        let err = (q[k] - q[k - 1]).modulus();
        if err < best.1 {
            best = (q[k], err);
        }
    }
    best
}

/// The full 12-point rule: positive nodes first, then their mirrors.
fn rule<R: crate::traits::FloatScalar>() -> ([R; RULE_LEN], [R; RULE_LEN]) {
    let mut x = [R::zero(); RULE_LEN];
    let mut w = [R::zero(); RULE_LEN];
    for i in 0..NODES.len() {
        x[i] = c(NODES[i]);
        x[i + NODES.len()] = c(-NODES[i]);
        w[i] = c(WEIGHTS[i]);
        w[i + NODES.len()] = c(WEIGHTS[i]);
    }
    (x, w)
}
