//! Gauss-Jacobi nodes on [-1, 1], p(x) = (1-x)^alpha (1+x)^beta.

use super::newton::{newton_solve, OrthogonalFamily};
use crate::special::ln_gamma;

pub(crate) struct Jacobi {
    pub alpha: f64,
    pub beta: f64,
}

impl Jacobi {
    #[inline]
    fn ab(&self) -> f64 {
        self.alpha + self.beta
    }

    /// `2j + alpha + beta`, the running factor of the recurrence.
    #[inline]
    fn tmp(&self, j: usize) -> f64 {
        2.0 * j as f64 + self.ab()
    }
}

impl OrthogonalFamily for Jacobi {
    const FIRST_STEP: usize = 2;

    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn initial_guesses(&self, n: usize) -> Vec<f64> {
        let nf = n as f64;
        let denom = nf + 0.5 * (self.ab() + 1.0);
        (1..=n)
            .map(|i| {
                let theta = core::f64::consts::PI * (i as f64 - 0.25 + 0.5 * self.alpha) / denom;
                theta.cos()
            })
            .collect()
    }

    fn seed(&self, z: f64) -> (f64, f64) {
        (1.0, (self.alpha - self.beta + self.tmp(1) * z) / 2.0)
    }

    fn step(&self, j: usize, z: f64, p_jm2: f64, p_jm1: f64) -> f64 {
        let (alpha, beta) = (self.alpha, self.beta);
        let jf = j as f64;
        let prev = self.tmp(j - 1);
        let tmp = self.tmp(j);
        let a = 2.0 * jf * (jf + self.ab()) * prev;
        let c = 2.0 * (jf - 1.0 + alpha) * (jf - 1.0 + beta) * tmp;
        let b = (tmp - 1.0) * (alpha * alpha - beta * beta + tmp * (tmp - 2.0) * z);
        (b * p_jm1 - c * p_jm2) / a
    }

    fn derivative(&self, n: usize, z: f64, p_n: f64, p_nm1: f64) -> f64 {
        let nf = n as f64;
        let tmp = self.tmp(n);
        (nf * (self.alpha - self.beta - tmp * z) * p_n
            + 2.0 * (nf + self.alpha) * (nf + self.beta) * p_nm1)
            / (tmp * (1.0 - z * z))
    }

    fn weight(&self, n: usize, _z: f64, dp_n: f64, p_nm1: f64) -> f64 {
        let nf = n as f64;
        let (alpha, beta) = (self.alpha, self.beta);
        let log_norm = ln_gamma(alpha + nf) + ln_gamma(beta + nf)
            - ln_gamma(nf + 1.0)
            - ln_gamma(alpha + beta + nf + 1.0);
        log_norm.exp() * self.tmp(n) * 2f64.powf(self.ab()) / (dp_n * p_nm1)
    }
}

/// Nodes in descending order. `alpha, beta > -1` is checked by the caller.
pub(crate) fn roots(n: usize, alpha: f64, beta: f64) -> (Vec<f64>, Vec<f64>) {
    let family = Jacobi { alpha, beta };
    newton_solve(&family, n).into_rule(&family, n)
}
