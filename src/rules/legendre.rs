//! Gauss-Legendre nodes on [-1, 1], p(x) = 1.

use super::newton::{expand_symmetric, newton_solve, OrthogonalFamily, Tolerance};

/// Asymptotic starting values for the `ceil(n/2)` positive roots,
/// largest first.
fn initial_guesses(n: usize) -> Vec<f64> {
    let m = (n + 1) / 2;
    let nf = n as f64;
    let scale = 1.0 - (1.0 - 1.0 / nf) / (8.0 * nf * nf);
    let step = core::f64::consts::PI / (4.0 * nf + 2.0);
    (0..m)
        .map(|i| scale * (step * (3 + 4 * i) as f64).cos())
        .collect()
}

/// `(P_n(x), P_{n-1}(x))` by the Bonnet recurrence.
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    let mut pkm1 = 1.0;
    let mut pk = x;
    for k in 2..=n {
        let t1 = x * pk;
        let pkp1 = t1 - pkm1 - (t1 - pkm1) / k as f64 + t1;
        pkm1 = pk;
        pk = pkp1;
    }
    (pk, pkm1)
}

/// One fourth-order Taylor correction of a Legendre root estimate
/// (Davis & Rabinowitz, *Methods of Numerical Integration*, p. 365).
struct Correction {
    h: f64,
    d1: f64,
    pk: f64,
    dpn: f64,
    d2pn: f64,
    d3pn: f64,
    d4pn: f64,
}

impl Correction {
    fn at(n: usize, xo: f64) -> Self {
        let nf = n as f64;
        let e1 = nf * (nf + 1.0);
        let (pk, pkm1) = legendre_pair(n, xo);

        let den = 1.0 - xo * xo;
        let d1 = nf * (pkm1 - xo * pk);
        let dpn = d1 / den;
        let d2pn = (2.0 * xo * dpn - e1 * pk) / den;
        let d3pn = (4.0 * xo * d2pn + (2.0 - e1) * dpn) / den;
        let d4pn = (6.0 * xo * d3pn + (6.0 - e1) * d2pn) / den;

        let u = pk / dpn;
        let v = d2pn / dpn;
        let h = -u * (1.0 + (0.5 * u) * (v + u * (v * v - u * d3pn / (3.0 * dpn))));
        let p = pk + h * (dpn + (0.5 * h) * (d2pn + (h / 3.0) * (d3pn + 0.25 * h * d4pn)));
        let dp = dpn + h * (d2pn + (0.5 * h) * (d3pn + h * d4pn / 3.0));

        Self {
            h: h - p / dp,
            d1,
            pk,
            dpn,
            d2pn,
            d3pn,
            d4pn,
        }
    }

    /// `P_n'` extrapolated to the corrected root, scaled by `1 - x^2`.
    fn scaled_derivative(&self, e1: f64) -> f64 {
        let h = self.h;
        self.d1
            - h * e1
                * (self.pk
                    + (h / 2.0)
                        * (self.dpn
                            + (h / 3.0) * (self.d2pn + (h / 4.0) * (self.d3pn + (0.2 * h) * self.d4pn))))
    }
}

/// Two high-order corrections per root, no convergence loop.
pub(crate) fn high_order(n: usize) -> (Vec<f64>, Vec<f64>) {
    let nf = n as f64;
    let e1 = nf * (nf + 1.0);
    let (x, w): (Vec<f64>, Vec<f64>) = initial_guesses(n)
        .into_iter()
        .map(|mut xo| {
            let first = Correction::at(n, xo);
            xo += first.h;
            let last = Correction::at(n, xo);
            xo += last.h;

            let x = -xo - last.h;
            let fx = last.scaled_derivative(e1);
            (x, 2.0 * (1.0 - x * x) / (fx * fx))
        })
        .unzip();
    expand_symmetric(x, w, n)
}

/// Plain three-term recurrence with Newton updates, to 1e-15.
pub(crate) struct LegendreRecurrence;

impl OrthogonalFamily for LegendreRecurrence {
    const FIRST_STEP: usize = 2;

    fn name(&self) -> &'static str {
        "Legendre"
    }

    fn tolerance(&self) -> Tolerance {
        Tolerance {
            rel: 1e-15,
            max_iter: 100,
        }
    }

    fn initial_guesses(&self, n: usize) -> Vec<f64> {
        initial_guesses(n)
    }

    fn seed(&self, z: f64) -> (f64, f64) {
        (1.0, z)
    }

    fn step(&self, j: usize, z: f64, p_jm2: f64, p_jm1: f64) -> f64 {
        let jf = j as f64;
        ((2.0 * jf - 1.0) * z * p_jm1 - (jf - 1.0) * p_jm2) / jf
    }

    fn derivative(&self, n: usize, z: f64, p_n: f64, p_nm1: f64) -> f64 {
        n as f64 * (p_nm1 - z * p_n) / (1.0 - z * z)
    }

    fn weight(&self, _n: usize, z: f64, dp_n: f64, _p_nm1: f64) -> f64 {
        2.0 / ((1.0 - z * z) * dp_n * dp_n)
    }
}

pub(crate) fn recurrence(n: usize) -> (Vec<f64>, Vec<f64>) {
    let family = LegendreRecurrence;
    let (x, w) = newton_solve(&family, n).into_rule(&family, n);
    let x = x.into_iter().map(|xo| -xo).collect();
    expand_symmetric(x, w, n)
}
