use core::f64::consts::PI;

use ndarray::{s, Array1, Array2, ArrayView2, ArrayViewD, Axis, IxDyn};

use super::broadcast::Batch;
use super::integrand::Integrand;
use super::ClenshawCurtisSolution;
use crate::error::QuadError;

/// Maximum distance between a tabulated abscissa and its Chebyshev point.
const ABSCISSA_TOL: f64 = 1e-8;

/// Clenshaw-Curtis quadrature on 2n+1 Chebyshev points.
///
/// Samples `f` at `x_k = cos(πk/2n)·(b−a)/2 + (b+a)/2`, `k = 0..=2n`, for
/// every problem in the broadcast batch of limits and integrates the
/// cosine-series fit exactly. The rule is exact for polynomials of degree
/// `2·half_order` or less; the error estimate is the size of the last
/// retained coefficient and is usually conservative.
///
/// # Errors
///
/// [`QuadError::InvalidParameter`] if `half_order` is zero,
/// [`QuadError::ShapeMismatch`] if `a` and `b` do not broadcast.
///
/// # Example
///
/// ```
/// use ndarray::arr0;
/// use quadris::integrate::clencurt;
///
/// let a = arr0(0.0).into_dyn();
/// let b = arr0(2.0).into_dyn();
/// let sol = clencurt(f64::exp, a.view(), b.view(), 5).unwrap();
/// assert!((sol.values[[0]] - 2f64.exp_m1()).abs() < 1e-10);
/// assert!(sol.errors[[0]] < 1e-10);
/// ```
pub fn clencurt<F: Integrand>(
    mut f: F,
    a: ArrayViewD<'_, f64>,
    b: ArrayViewD<'_, f64>,
    half_order: usize,
) -> Result<ClenshawCurtisSolution, QuadError> {
    if half_order == 0 {
        return Err(QuadError::InvalidParameter("half order must be positive"));
    }
    let batch = Batch::new(a, b, &[])?;
    let n = 2 * half_order;
    let cheb = chebyshev_points(n);

    // One row per problem, as the integrand expects.
    let x = Array2::from_shape_fn((batch.len(), n + 1), |(i, k)| {
        let (ai, bi) = (batch.a[i], batch.b[i]);
        cheb[k] * (bi - ai) / 2.0 + (bi + ai) / 2.0
    });
    let y = f.eval(x.view(), batch.args.view());
    if y.dim() != x.dim() {
        return Err(QuadError::ShapeMismatch(x.shape().to_vec(), y.shape().to_vec()));
    }

    let (values, errors) = integrate_samples(y.t(), batch.a.view(), batch.b.view());
    Ok(ClenshawCurtisSolution {
        values: values.into_shape(IxDyn(&batch.shape)).map_err(shape_err)?,
        errors: errors.into_shape(IxDyn(&batch.shape)).map_err(shape_err)?,
        evals: x.len(),
    })
}

/// Clenshaw-Curtis quadrature of tabulated samples.
///
/// `samples` has `2n+1` rows ordered from `a` to `b`. Its first column holds
/// the abscissas, which must equal `cos(πk/2n)·(b−a)/2 + (b+a)/2` (in
/// reverse, ascending order) to within 1e-8. Every further column is one
/// integrand, sampled at those abscissas.
///
/// # Errors
///
/// [`QuadError::InvalidParameter`] for an even row count, fewer than three
/// rows or no value column; [`QuadError::AbscissaMismatch`] if the abscissas
/// are not the Chebyshev points of `[a, b]`.
pub fn clencurt_samples(samples: ArrayView2<'_, f64>, a: f64, b: f64) -> Result<ClenshawCurtisSolution, QuadError> {
    let (rows, cols) = samples.dim();
    if rows < 3 || rows % 2 == 0 {
        return Err(QuadError::InvalidParameter("sample table needs an odd number of rows, at least 3"));
    }
    if cols < 2 {
        return Err(QuadError::InvalidParameter("sample table needs at least one value column"));
    }
    let n = rows - 1;
    let flipped = samples.slice(s![..;-1, ..]);

    let cheb = chebyshev_points(n);
    let mismatch = cheb
        .iter()
        .zip(flipped.column(0))
        .any(|(&t, &x0)| !((t * (b - a) / 2.0 + (b + a) / 2.0 - x0).abs() <= ABSCISSA_TOL));
    if mismatch {
        return Err(QuadError::AbscissaMismatch);
    }

    let m = cols - 1;
    let av = Array1::from_elem(m, a);
    let bv = Array1::from_elem(m, b);
    let (values, errors) = integrate_samples(flipped.slice(s![.., 1..]), av.view(), bv.view());
    Ok(ClenshawCurtisSolution {
        values: values.into_dyn(),
        errors: errors.into_dyn(),
        evals: 0,
    })
}

fn shape_err(_: ndarray::ShapeError) -> QuadError {
    QuadError::InvalidParameter("result does not fit the broadcast shape")
}

/// `cos(πk/n)`, `k = 0..=n`.
fn chebyshev_points(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n + 1, |k| (PI * k as f64 / n as f64).cos())
}

/// Core transform: `f` has one row per Chebyshev point (`n+1` rows, `n`
/// even) and one column per problem.
///
/// The even Chebyshev coefficients are the DCT-I of the samples with halved
/// endpoints, `c_j = (2/n) Σ'' f_m cos(2πjm/n)`, `j = 0..=n/2`. The integral
/// of the series over `[a, b]` is `(a − b) Σ' c_j / ((2j−1)(2j+1))`.
fn integrate_samples(
    f: ArrayView2<'_, f64>,
    a: ndarray::ArrayView1<'_, f64>,
    b: ndarray::ArrayView1<'_, f64>,
) -> (Array1<f64>, Array1<f64>) {
    let n = f.nrows() - 1;
    let half = n / 2;

    let mut g = f.to_owned();
    g.row_mut(0).mapv_inplace(|v| v / 2.0);
    g.row_mut(n).mapv_inplace(|v| v / 2.0);

    // Direct O(n^2) cosine sum standing in for an FFT-based DCT-I. It is
    // rebuilt on every call; callers that repeat one order pay it each time.
    let cos_table = Array2::from_shape_fn((half + 1, n), |(j, m)| {
        (2.0 * PI * (j * m % n) as f64 / n as f64).cos()
    });
    let mut coeffs = cos_table.dot(&g.slice(s![..n, ..]));
    coeffs += &g.row(n).insert_axis(Axis(0));
    coeffs *= 2.0 / n as f64;
    coeffs.row_mut(0).mapv_inplace(|v| v / 2.0);
    coeffs.row_mut(half).mapv_inplace(|v| v / 2.0);
    for (j, mut row) in coeffs.axis_iter_mut(Axis(0)).enumerate() {
        let s2 = 2.0 * j as f64;
        row.mapv_inplace(|v| v / ((s2 - 1.0) * (s2 + 1.0)));
    }

    let length = &b - &a;
    let values = coeffs.sum_axis(Axis(0)) * &length.mapv(|h| -h);
    let errors = coeffs.row(half).mapv(f64::abs) * &length.mapv(f64::abs);
    (values, errors)
}
