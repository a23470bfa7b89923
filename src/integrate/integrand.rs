use ndarray::{Array2, ArrayView2, Zip};

/// A function evaluated on a whole batch of abscissas at once.
///
/// `x` has one row per integration problem and one column per node. `args`
/// has the same number of rows and one column per extra argument, already
/// broadcast against the limits. The result must have the shape of `x`.
///
/// Implemented for plain `FnMut(f64) -> f64` closures, for
/// [`WithArgs`] (pointwise with per-problem arguments) and for
/// [`Vectorized`] (whole-batch functions).
pub trait Integrand {
    fn eval(&mut self, x: ArrayView2<'_, f64>, args: ArrayView2<'_, f64>) -> Array2<f64>;
}

impl<F> Integrand for F
where
    F: FnMut(f64) -> f64,
{
    fn eval(&mut self, x: ArrayView2<'_, f64>, _args: ArrayView2<'_, f64>) -> Array2<f64> {
        x.map(|&xi| self(xi))
    }
}

/// Pointwise integrand that also receives its problem's extra arguments.
///
/// ```
/// use ndarray::{arr1, arr0};
/// use quadris::integrate::{gaussq, GaussSettings, WithArgs};
///
/// // ∫_0^1 p x dx for p = 1, 2, 3
/// let f = WithArgs(|x: f64, p: &[f64]| p[0] * x);
/// let a = arr0(0.0).into_dyn();
/// let b = arr0(1.0).into_dyn();
/// let p = arr1(&[1.0, 2.0, 3.0]).into_dyn();
/// let sol = gaussq(f, a.view(), b.view(), &[p.view()], &GaussSettings::default()).unwrap();
/// assert!((sol.values[[2]] - 1.5).abs() < 1e-12);
/// ```
pub struct WithArgs<F>(pub F);

impl<F> Integrand for WithArgs<F>
where
    F: FnMut(f64, &[f64]) -> f64,
{
    fn eval(&mut self, x: ArrayView2<'_, f64>, args: ArrayView2<'_, f64>) -> Array2<f64> {
        let mut out = Array2::zeros(x.raw_dim());
        for ((mut row, xs), p) in out.rows_mut().into_iter().zip(x.rows()).zip(args.rows()) {
            let p = p.to_vec();
            Zip::from(&mut row).and(&xs).for_each(|o, &xi| *o = (self.0)(xi, p.as_slice()));
        }
        out
    }
}

/// Integrand that maps the whole `(x, args)` batch in one call.
pub struct Vectorized<F>(pub F);

impl<F> Vectorized<F>
where
    F: FnMut(ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Array2<f64>,
{
    /// Wrap `f`, pinning the closure signature for inference.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Integrand for Vectorized<F>
where
    F: FnMut(ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Array2<f64>,
{
    fn eval(&mut self, x: ArrayView2<'_, f64>, args: ArrayView2<'_, f64>) -> Array2<f64> {
        (self.0)(x, args)
    }
}
