//! Shared Newton iteration for the roots of a three-term-recurrence family.
//!
//! Every family is described by an [`OrthogonalFamily`] strategy: initial
//! guesses, the first two polynomial values, one recurrence step, the
//! derivative relation and the weight formula. [`newton_solve`] drives all
//! guesses at once through a rotating three-row [`RecurrenceBuffer`].

/// Columns whose newest value exceeds this are scaled down by
/// [`RESCALE_FACTOR`].
const RESCALE_ABOVE: f64 = 1.340_780_792_994_259_7e154; // 2^512
const RESCALE_FACTOR: f64 = 7.458_340_731_200_207e-155; // 2^-512
const RESCALE_LOG: f64 = 512.0 * core::f64::consts::LN_2;

/// An update no larger than `NOISE_FACTOR` times the tolerance that has
/// stopped shrinking is rounding noise.
const NOISE_FACTOR: f64 = 1e3;

/// Two nodes closer than this (relative to `max(|x|, 1)`) coincide.
const COINCIDENT: f64 = 1e-10;

/// Stopping test for the Newton updates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tolerance {
    /// Update size, relative to `max(|z|, 1)`, below which a root is frozen.
    pub rel: f64,
    /// Sweeps before giving up with a warning.
    pub max_iter: usize,
}

impl Tolerance {
    /// Tolerance used by the Hermite, Jacobi and Laguerre solvers.
    pub const STANDARD: Self = Self {
        rel: 3e-14,
        max_iter: 10,
    };

    /// True when a root moved by `step` (after moving by `previous` on the
    /// sweep before) can be frozen at `z`. NaN steps never settle.
    #[inline]
    pub fn settled(&self, step: f64, previous: f64, z: f64) -> bool {
        let tol = self.rel * z.abs().max(1.0);
        step <= tol || (step <= NOISE_FACTOR * tol && step >= 0.5 * previous)
    }
}

/// One polynomial family seen by the Newton skeleton.
///
/// `P_k` denotes the family's polynomial of degree `k` in whatever
/// normalisation the recurrence produces; the derivative and weight
/// formulas must use the same normalisation. The derivative must be linear
/// in `(P_n, P_{n-1})` and the weight homogeneous of degree -2 in
/// `(P_n', P_{n-1})`, so columns can be rescaled during the recurrence.
pub(crate) trait OrthogonalFamily {
    /// Degree produced by the first call to [`step`](Self::step).
    const FIRST_STEP: usize;

    /// Family name for diagnostics.
    fn name(&self) -> &'static str;

    fn tolerance(&self) -> Tolerance {
        Tolerance::STANDARD
    }

    /// Starting approximations for the roots that will be refined.
    fn initial_guesses(&self, n: usize) -> Vec<f64>;

    /// `(P_{FIRST_STEP-2}(z), P_{FIRST_STEP-1}(z))`.
    fn seed(&self, z: f64) -> (f64, f64);

    /// `P_j(z)` from `P_{j-2}(z)` and `P_{j-1}(z)`.
    fn step(&self, j: usize, z: f64, p_jm2: f64, p_jm1: f64) -> f64;

    /// `P_n'(z)` from `P_n(z)` and `P_{n-1}(z)`.
    fn derivative(&self, n: usize, z: f64, p_n: f64, p_nm1: f64) -> f64;

    /// Quadrature weight of the root `z`, given `P_n'` and `P_{n-1}` there.
    fn weight(&self, n: usize, z: f64, dp_n: f64, p_nm1: f64) -> f64;
}

/// Three rows of polynomial values, one column per root, addressed through
/// a rotating `km1 / k0 / kp1` triple so no row is ever copied.
///
/// A column that grows past `2^512` is scaled down and the natural log of
/// the removed factor is accumulated in `log_scale`.
pub(crate) struct RecurrenceBuffer {
    rows: [Vec<f64>; 3],
    log_scale: Vec<f64>,
    km1: usize,
    k0: usize,
    kp1: usize,
}

impl RecurrenceBuffer {
    pub fn new(m: usize) -> Self {
        Self {
            rows: [vec![0.0; m], vec![0.0; m], vec![0.0; m]],
            log_scale: vec![0.0; m],
            km1: 2,
            k0: 0,
            kp1: 1,
        }
    }

    /// Load the two starting degrees for the listed columns.
    pub fn seed(&mut self, active: &[usize], mut f: impl FnMut(usize) -> (f64, f64)) {
        for &i in active {
            let (lower, upper) = f(i);
            self.rows[self.k0][i] = lower;
            self.rows[self.kp1][i] = upper;
            self.log_scale[i] = 0.0;
        }
    }

    /// Rotate the rows and fill the new top row for the listed columns.
    pub fn advance(&mut self, active: &[usize], mut f: impl FnMut(usize, f64, f64) -> f64) {
        self.km1 = self.k0;
        self.k0 = self.kp1;
        self.kp1 = (self.kp1 + 1) % 3;
        for &i in active {
            let next = f(i, self.rows[self.km1][i], self.rows[self.k0][i]);
            self.rows[self.kp1][i] = next;
            if next.abs() > RESCALE_ABOVE {
                self.rows[self.kp1][i] *= RESCALE_FACTOR;
                self.rows[self.k0][i] *= RESCALE_FACTOR;
                self.log_scale[i] += RESCALE_LOG;
            }
        }
    }

    /// Highest degree computed so far.
    #[inline]
    pub fn top(&self, i: usize) -> f64 {
        self.rows[self.kp1][i]
    }

    /// One degree below [`top`](Self::top).
    #[inline]
    pub fn below(&self, i: usize) -> f64 {
        self.rows[self.k0][i]
    }

    /// Log of the factor removed from column `i` since it was seeded.
    #[inline]
    pub fn log_scale(&self, i: usize) -> f64 {
        self.log_scale[i]
    }
}

/// Refined roots together with the quantities the weight formulas need.
pub(crate) struct NewtonSolution {
    pub roots: Vec<f64>,
    /// `P_n'` at each refined root, in the column's scaled units.
    pub derivative: Vec<f64>,
    /// `P_{n-1}` at each refined root, in the column's scaled units.
    pub lower: Vec<f64>,
    /// Natural log of the factor removed from each column.
    pub log_scale: Vec<f64>,
    /// Roots still moving when the iteration cap was hit.
    pub unconverged: usize,
}

impl NewtonSolution {
    /// Weights of the refined roots, in root order.
    pub fn weights<F: OrthogonalFamily>(&self, family: &F, n: usize) -> Vec<f64> {
        self.roots
            .iter()
            .zip(self.derivative.iter().zip(self.lower.iter()))
            .zip(self.log_scale.iter())
            .map(|((&z, (&dp, &low)), &s)| family.weight(n, z, dp, low) * (-2.0 * s).exp())
            .collect()
    }

    /// Roots and weights, with a warning for every defect found.
    pub fn into_rule<F: OrthogonalFamily>(self, family: &F, n: usize) -> (Vec<f64>, Vec<f64>) {
        let w = self.weights(family, n);
        if self.unconverged > 0 {
            log::warn!(
                "{} roots: too many iterations, {} of {} roots not converged",
                family.name(),
                self.unconverged,
                self.roots.len()
            );
        }
        let defects = defective_nodes(&self.roots, &w);
        if defects > 0 {
            log::warn!(
                "{} roots: {} of {} nodes are coinciding or not finite",
                family.name(),
                defects,
                self.roots.len()
            );
        }
        (self.roots, w)
    }
}

/// Number of nodes that are not finite, carry a non-finite weight, or
/// coincide with a neighbour.
pub(crate) fn defective_nodes(x: &[f64], w: &[f64]) -> usize {
    let broken = x
        .iter()
        .zip(w.iter())
        .filter(|(xi, wi)| !(xi.is_finite() && wi.is_finite()))
        .count();

    let mut sorted: Vec<f64> = x.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let coinciding = sorted
        .windows(2)
        .filter(|pair| !(pair[1] - pair[0] > COINCIDENT * pair[0].abs().max(1.0)))
        .count();

    broken + coinciding
}

/// Run the recurrence up to degree `n` for the listed columns.
fn evaluate<F: OrthogonalFamily>(family: &F, n: usize, z: &[f64], active: &[usize], buf: &mut RecurrenceBuffer) {
    buf.seed(active, |i| family.seed(z[i]));
    for j in F::FIRST_STEP..=n {
        buf.advance(active, |i, p_jm2, p_jm1| family.step(j, z[i], p_jm2, p_jm1));
    }
}

/// Simultaneous Newton iteration on all initial guesses of `family`.
///
/// A root stops being updated once its step passes the tolerance test; the
/// sweep ends when every root is frozen or the iteration cap is hit, in
/// which case the last iterate is kept. The derivative and `P_{n-1}` are
/// then evaluated once more at the final roots.
pub(crate) fn newton_solve<F: OrthogonalFamily>(family: &F, n: usize) -> NewtonSolution {
    let mut z = family.initial_guesses(n);
    let m = z.len();
    let tol = family.tolerance();

    let mut buf = RecurrenceBuffer::new(m);
    let mut previous = vec![f64::INFINITY; m];
    let mut active: Vec<usize> = (0..m).collect();

    for _ in 0..tol.max_iter {
        evaluate(family, n, &z, &active, &mut buf);

        active.retain(|&i| {
            let p_n = buf.top(i);
            let dz = p_n / family.derivative(n, z[i], p_n, buf.below(i));
            z[i] -= dz;
            let step = dz.abs();
            let settled = tol.settled(step, previous[i], z[i]);
            previous[i] = step;
            !settled
        });

        if active.is_empty() {
            break;
        }
    }

    let all: Vec<usize> = (0..m).collect();
    evaluate(family, n, &z, &all, &mut buf);
    let lower: Vec<f64> = all.iter().map(|&i| buf.below(i)).collect();
    let derivative = all
        .iter()
        .map(|&i| family.derivative(n, z[i], buf.top(i), lower[i]))
        .collect();
    let log_scale = all.iter().map(|&i| buf.log_scale(i)).collect();

    NewtonSolution {
        roots: z,
        derivative,
        lower,
        log_scale,
        unconverged: active.len(),
    }
}

/// Mirror a half set of roots about the origin.
///
/// `x` holds the `m = ceil(n/2)` roots on one side. For odd `n` the last of
/// them is the centre root and is pinned to exactly zero. Weights are
/// mirrored unchanged.
pub(crate) fn expand_symmetric(mut x: Vec<f64>, mut w: Vec<f64>, n: usize) -> (Vec<f64>, Vec<f64>) {
    let m = x.len();
    let mirrored = if 2 * m > n {
        x[m - 1] = 0.0;
        m - 1
    } else {
        m
    };
    for i in (0..mirrored).rev() {
        x.push(-x[i]);
        w.push(w[i]);
    }
    (x, w)
}
