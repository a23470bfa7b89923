//! Generalized Gauss-Laguerre nodes on [0, inf), p(x) = x^alpha exp(-x).

use super::newton::{newton_solve, OrthogonalFamily};
use crate::special::ln_gamma;

/// Solve `t - sin(t) = rhs` for `t` in `(0, pi]`.
fn kepler(rhs: f64) -> f64 {
    let mut t = (6.0 * rhs).cbrt().min(core::f64::consts::PI);
    for _ in 0..50 {
        let d = (t - t.sin() - rhs) / (1.0 - t.cos());
        t -= d;
        if d.abs() <= 1e-15 * t {
            break;
        }
    }
    t
}

/// Tricomi's asymptotic approximation of the `n` roots of `L_n^(alpha)`,
/// in ascending order.
///
/// Accurate enough for Newton to converge to distinct roots at any order.
pub(crate) fn tricomi_guesses(n: usize, alpha: f64) -> Vec<f64> {
    let nu = 4.0 * n as f64 + 2.0 * alpha + 2.0;
    (1..=n)
        .map(|k| {
            let theta = kepler((4 * (n - k) + 3) as f64 * core::f64::consts::PI / nu);
            let c = (0.5 * theta).cos();
            let s = c * c;
            let t = 1.0 - s;
            nu * s - (5.0 / (4.0 * t * t) - 1.0 / t - 1.0 + 3.0 * alpha * alpha) / (3.0 * nu)
        })
        .collect()
}

pub(crate) struct Laguerre {
    pub alpha: f64,
}

impl OrthogonalFamily for Laguerre {
    const FIRST_STEP: usize = 1;

    fn name(&self) -> &'static str {
        "Laguerre"
    }

    fn initial_guesses(&self, n: usize) -> Vec<f64> {
        tricomi_guesses(n, self.alpha)
    }

    fn seed(&self, _z: f64) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn step(&self, j: usize, z: f64, p_jm2: f64, p_jm1: f64) -> f64 {
        let jf = j as f64;
        ((2.0 * jf - 1.0 + self.alpha - z) * p_jm1 - (jf - 1.0 + self.alpha) * p_jm2) / jf
    }

    fn derivative(&self, n: usize, z: f64, p_n: f64, p_nm1: f64) -> f64 {
        let nf = n as f64;
        (nf * p_n - (nf + self.alpha) * p_nm1) / z
    }

    fn weight(&self, n: usize, _z: f64, dp_n: f64, p_nm1: f64) -> f64 {
        let nf = n as f64;
        let norm = (ln_gamma(self.alpha + nf) - ln_gamma(nf)).exp();
        -norm / (dp_n * nf * p_nm1)
    }
}

/// Nodes in ascending order. `alpha > -1` is checked by the caller.
pub(crate) fn roots(n: usize, alpha: f64) -> (Vec<f64>, Vec<f64>) {
    let family = Laguerre { alpha };
    newton_solve(&family, n).into_rule(&family, n)
}
