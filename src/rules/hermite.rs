//! Gauss-Hermite nodes on (-inf, inf), p(x) = exp(-x^2).

use super::laguerre::tricomi_guesses;
use super::newton::{expand_symmetric, newton_solve, OrthogonalFamily};

/// Orthonormal Hermite recurrence, seeded with `pi^(-1/4)`.
pub(crate) struct Hermite;

impl OrthogonalFamily for Hermite {
    const FIRST_STEP: usize = 1;

    fn name(&self) -> &'static str {
        "Hermite"
    }

    /// The `ceil(n/2)` non-negative roots, largest first.
    ///
    /// `H_{2m}(x)` is a multiple of `L_m^(-1/2)(x^2)` and `H_{2m+1}(x)` of
    /// `x L_m^(1/2)(x^2)`, so the Laguerre guesses carry over; odd orders
    /// add the centre root.
    fn initial_guesses(&self, n: usize) -> Vec<f64> {
        let alpha = if n % 2 == 0 { -0.5 } else { 0.5 };
        let mut guesses: Vec<f64> = tricomi_guesses(n / 2, alpha)
            .into_iter()
            .rev()
            .map(|v| v.max(0.0).sqrt())
            .collect();
        if n % 2 == 1 {
            guesses.push(0.0);
        }
        guesses
    }

    fn seed(&self, _z: f64) -> (f64, f64) {
        (0.0, core::f64::consts::PI.powf(-0.25))
    }

    fn step(&self, j: usize, z: f64, p_jm2: f64, p_jm1: f64) -> f64 {
        let jf = j as f64;
        z * (2.0 / jf).sqrt() * p_jm1 - ((jf - 1.0) / jf).sqrt() * p_jm2
    }

    fn derivative(&self, n: usize, _z: f64, _p_n: f64, p_nm1: f64) -> f64 {
        (2.0 * n as f64).sqrt() * p_nm1
    }

    fn weight(&self, _n: usize, _z: f64, dp_n: f64, _p_nm1: f64) -> f64 {
        2.0 / (dp_n * dp_n)
    }
}

pub(crate) fn roots(n: usize) -> (Vec<f64>, Vec<f64>) {
    let (x, w) = newton_solve(&Hermite, n).into_rule(&Hermite, n);
    expand_symmetric(x, w, n)
}
