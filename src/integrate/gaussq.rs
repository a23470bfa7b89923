use ndarray::{Array1, Array2, ArrayViewD, Axis, IxDyn};

use super::broadcast::Batch;
use super::integrand::Integrand;
use super::GaussSolution;
use crate::error::QuadError;
use crate::rules::{QuadratureTable, WeightFunction};

/// Settings for [`gaussq`].
#[derive(Debug, Clone, Copy)]
pub struct GaussSettings {
    /// Weight function p(x) of the integral ∫ p(x) f(x) dx.
    pub weight: WeightFunction,
    /// Shape parameter α (Laguerre, Jacobi), must exceed −1.
    pub alpha: f64,
    /// Shape parameter β (Jacobi), must exceed −1.
    pub beta: f64,
    /// Relative tolerance on the change between passes.
    pub rel_tol: f64,
    /// Absolute tolerance on the change between passes.
    pub abs_tol: f64,
    /// Maximum number of passes; the node count doubles on each.
    pub max_iter: usize,
    /// Node count of the first pass.
    pub initial_nodes: usize,
}

impl Default for GaussSettings {
    fn default() -> Self {
        Self {
            weight: WeightFunction::Legendre,
            alpha: 0.0,
            beta: 0.0,
            rel_tol: 1e-3,
            abs_tol: 1e-3,
            max_iter: 11,
            initial_nodes: 2,
        }
    }
}

/// Maps the canonical rule domain onto each problem's `[a, b]`.
struct DomainMap {
    /// Affine scale applied to the shifted node.
    jacob: Array1<f64>,
    /// Added to the node before scaling: 1 for rules on [−1, 1], else 0.
    shift: f64,
    /// Factor applied to the weighted sum.
    dx: Array1<f64>,
}

impl DomainMap {
    fn new(settings: &GaussSettings, a: &Array1<f64>, b: &Array1<f64>) -> Self {
        use WeightFunction::*;

        let jacob = match settings.weight {
            Hermite | Laguerre => Array1::ones(a.len()),
            SqrtRatio | InvSqrtRight | SqrtRight => b - a,
            Legendre | Jacobi | Chebyshev1 | Chebyshev2 => (b - a) * 0.5,
        };
        let shift = match settings.weight {
            Legendre | Jacobi | Chebyshev1 | Chebyshev2 => 1.0,
            _ => 0.0,
        };
        let power = settings.alpha + settings.beta + 1.0;
        let dx = match settings.weight {
            Legendre | Hermite | Laguerre | SqrtRatio => jacob.clone(),
            Jacobi => jacob.mapv(|j| j.powf(power)),
            Chebyshev1 => Array1::ones(a.len()),
            Chebyshev2 => jacob.mapv(|j| j * j),
            InvSqrtRight => jacob.mapv(f64::sqrt),
            SqrtRight => jacob.mapv(|j| j.sqrt().powi(3)),
        };
        Self { jacob, shift, dx }
    }
}

/// Adaptive Gauss quadrature of ∫ p(x) f(x) dx over a batch of problems,
/// using the process-wide [`QuadratureTable::global`].
///
/// `a`, `b` and every entry of `args` are broadcast to one common shape;
/// each element is an independent integration problem whose extra
/// arguments are handed to `f` alongside the nodes (see
/// [`WithArgs`](super::WithArgs)).
///
/// On each pass the cached rule with the current node count is applied to
/// every problem that has not yet converged. From the second pass on, a
/// problem is done once its change from the previous pass is within
/// `max(rel_tol·|value|, abs_tol)`. The node count doubles between passes.
///
/// For the Hermite and Laguerre weights the rule's own infinite domain is
/// used and the limits only fix the batch shape.
///
/// A NaN estimate is replaced by the previous estimate of the same problem
/// (zero before any estimate exists). This keeps one bad evaluation from
/// spoiling the batch but can hide a broken integrand; the unconverged
/// count and the warning are the only signal.
///
/// # Errors
///
/// [`QuadError::InvalidParameter`] for out-of-range shape parameters or a
/// zero node count, [`QuadError::ShapeMismatch`] if the inputs do not
/// broadcast or `f` returns the wrong shape.
///
/// # Example
///
/// ```
/// use ndarray::arr1;
/// use quadris::integrate::{gaussq, GaussSettings};
///
/// // x² over [0, 2] and [1, 4]
/// let a = arr1(&[0.0, 1.0]).into_dyn();
/// let b = arr1(&[2.0, 4.0]).into_dyn();
/// let sol = gaussq(|x: f64| x * x, a.view(), b.view(), &[], &GaussSettings::default()).unwrap();
/// assert!((sol.values[[0]] - 8.0 / 3.0).abs() < 1e-12);
/// assert!((sol.values[[1]] - 21.0).abs() < 1e-12);
/// assert!(sol.converged());
/// ```
pub fn gaussq<F: Integrand>(
    f: F,
    a: ArrayViewD<'_, f64>,
    b: ArrayViewD<'_, f64>,
    args: &[ArrayViewD<'_, f64>],
    settings: &GaussSettings,
) -> Result<GaussSolution, QuadError> {
    gaussq_with_table(QuadratureTable::global(), f, a, b, args, settings)
}

/// [`gaussq`] with rules drawn from `table`.
pub fn gaussq_with_table<F: Integrand>(
    table: &QuadratureTable,
    mut f: F,
    a: ArrayViewD<'_, f64>,
    b: ArrayViewD<'_, f64>,
    args: &[ArrayViewD<'_, f64>],
    settings: &GaussSettings,
) -> Result<GaussSolution, QuadError> {
    settings.weight.validate(settings.alpha, settings.beta)?;
    if settings.initial_nodes == 0 {
        return Err(QuadError::InvalidParameter("initial node count must be positive"));
    }

    let mut batch = Batch::new(a, b, args)?;
    if matches!(settings.weight, WeightFunction::Hermite | WeightFunction::Laguerre) {
        batch.a.fill(0.0);
    }
    let map = DomainMap::new(settings, &batch.a, &batch.b);

    let nk = batch.len();
    let mut value = vec![0.0; nk];
    let mut previous = vec![0.0; nk];
    let mut error = vec![0.0; nk];
    let mut active: Vec<usize> = (0..nk).collect();

    let mut gn = settings.initial_nodes;
    let mut iterations = 0;
    let mut evals = 0;

    for pass in 0..settings.max_iter {
        iterations = pass + 1;
        let rule = table.get(settings.weight, gn, settings.alpha, settings.beta)?;

        let x = Array2::from_shape_fn((active.len(), gn), |(r, j)| {
            let k = active[r];
            (rule.nodes[j] + map.shift) * map.jacob[k] + batch.a[k]
        });
        let p = batch.args.select(Axis(0), &active);
        let y = f.eval(x.view(), p.view());
        if y.dim() != x.dim() {
            return Err(QuadError::ShapeMismatch(x.shape().to_vec(), y.shape().to_vec()));
        }
        evals += x.len();

        for (row, &k) in y.rows().into_iter().zip(&active) {
            let sum = row
                .iter()
                .zip(&rule.weights)
                .fold(0.0, |acc, (&yj, &wj)| acc + wj * yj);
            let v = sum * map.dx[k];
            value[k] = if v.is_nan() { previous[k] } else { v };
        }

        if pass > 0 {
            for &k in &active {
                error[k] = (previous[k] - value[k]).abs();
            }
            active.retain(|&k| error[k] > (settings.rel_tol * value[k]).abs().max(settings.abs_tol));
            if active.is_empty() {
                break;
            }
        }

        for &k in &active {
            previous[k] = value[k];
        }
        if pass + 1 < settings.max_iter {
            gn *= 2;
        }
    }

    let unconverged = active.len();
    if unconverged > 0 {
        warn_unconverged(unconverged, nk);
    }

    let shape = IxDyn(&batch.shape);
    Ok(GaussSolution {
        values: Array1::from(value).into_shape(shape.clone()).map_err(shape_err)?,
        errors: Array1::from(error).into_shape(shape).map_err(shape_err)?,
        iterations,
        nodes: gn,
        evals,
        unconverged,
    })
}

fn warn_unconverged(count: usize, total: usize) {
    if count > 1 {
        if count == total {
            log::warn!("All integrals did not converge--singularities likely!");
        } else {
            log::warn!("{} integrals did not converge--singularities likely!", count);
        }
    } else {
        log::warn!("Integral did not converge--singularity likely!");
    }
}

fn shape_err(_: ndarray::ShapeError) -> QuadError {
    QuadError::InvalidParameter("result does not fit the broadcast shape")
}
