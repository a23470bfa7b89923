use super::extrapolate::dea3;
use super::QuadResult;
use crate::error::QuadError;
use crate::traits::{c, FloatScalar};

/// Settings for [`romberg`].
#[derive(Debug, Clone, Copy)]
pub struct RombergSettings<T> {
    /// Relative tolerance on the accelerated estimate.
    pub rel_tol: T,
    /// Absolute tolerance on the accelerated estimate.
    pub abs_tol: T,
    /// Upper bound on the extrapolation table size.
    pub max_doublings: usize,
    /// Smallest trapezoid step; also bounds the table size.
    pub min_step: T,
}

impl Default for RombergSettings<f64> {
    fn default() -> Self {
        Self {
            rel_tol: 1e-3,
            abs_tol: 1e-3,
            max_doublings: 30,
            min_step: 1e-9,
        }
    }
}

impl Default for RombergSettings<f32> {
    fn default() -> Self {
        Self {
            rel_tol: 1e-3,
            abs_tol: 1e-3,
            max_doublings: 30,
            min_step: 1e-6,
        }
    }
}

/// Romberg integration of `f` over the finite interval `[a, b]`.
///
/// Halves the trapezoid step on each pass and extrapolates the trapezoid
/// sums with the factors 4, 16, 64, …. From the third pass on, the last
/// three diagonal entries of the table are accelerated with [`dea3`] and the
/// iteration stops once that error estimate is within
/// `max(abs_tol, rel_tol·|value|)`.
///
/// The table holds `max(3, min(round(log2((b−a)/min_step)), max_doublings))`
/// entries. When it is exhausted the last estimate is returned with
/// `converged = false`.
///
/// # Errors
///
/// [`QuadError::InvalidParameter`] if a limit is not finite.
///
/// # Example
///
/// ```
/// use quadris::integrate::{romberg, RombergSettings};
///
/// let settings = RombergSettings { rel_tol: 0.0, abs_tol: 1e-4, ..Default::default() };
/// let r = romberg(f64::sqrt, 0.0, 10.0, &settings).unwrap();
/// assert!((r.value - 21.08185107).abs() < 1e-3);
/// assert!(r.error < 1e-4);
/// ```
pub fn romberg<T: FloatScalar, F: FnMut(T) -> T>(
    mut f: F,
    a: T,
    b: T,
    settings: &RombergSettings<T>,
) -> Result<QuadResult<T>, QuadError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(QuadError::InvalidParameter("romberg limits must be finite"));
    }
    if a == b {
        return Ok(QuadResult::empty());
    }
    if a > b {
        let mut r = romberg(f, b, a, settings)?;
        r.value = -r.value;
        return Ok(r);
    }

    let half = c::<T>(0.5);
    let mut h = b - a;
    let table_limit = (h / settings.min_step)
        .log2()
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(settings.max_doublings)
        .max(3);

    let mut prev = vec![T::zero(); table_limit];
    let mut cur = vec![T::zero(); table_limit];
    let mut factor = vec![T::zero(); table_limit];
    factor[0] = c::<T>(4.0);

    prev[0] = h * (f(a) + f(b)) * half;
    let mut evals = 2;
    let mut panels = 1usize;

    let (mut ih2, mut ih4) = (T::zero(), prev[0]);
    let (mut value, mut error) = (ih4, ih4.abs());
    let mut converged = false;
    let mut iterations = 0;

    for i in 1..table_limit {
        iterations = i;
        h = h * half;
        let midpoints = (0..panels)
            .map(|j| f(a + T::from(2 * j + 1).unwrap() * h))
            .fold(T::zero(), |acc, y| acc + y);
        evals += panels;

        cur[0] = prev[0] * half + midpoints * h;
        factor[i] = factor[i - 1] * c::<T>(4.0);
        for k in 0..i {
            cur[k + 1] = cur[k] + (cur[k] - prev[k]) / (factor[k] - T::one());
        }

        let ih1 = ih2;
        ih2 = ih4;
        ih4 = cur[i];

        if i >= 2 {
            let (res, err) = dea3(ih1, ih2, ih4);
            value = res;
            error = err;
            if error <= settings.abs_tol.max(settings.rel_tol * value.abs()) {
                converged = true;
                break;
            }
        }

        core::mem::swap(&mut prev, &mut cur);
        panels *= 2;
    }

    if !converged {
        log::warn!(
            "romberg: extrapolation table exhausted after {} doublings, error estimate {:?}",
            iterations,
            error
        );
    }

    Ok(QuadResult {
        value,
        error,
        iterations,
        evals,
        converged,
    })
}
