//! Rules whose nodes and weights are known in closed form
//! (Abramowitz & Stegun 25.4.38 - 25.4.40 and the algebraic-singularity
//! rules derived from Gauss-Legendre by the substitution x = 1 - t^2).

use core::f64::consts::PI;

use super::legendre;
use super::newton::expand_symmetric;
use super::LegendreMethod;

/// p(x) = 1/sqrt(1-x^2) on [-1, 1].
pub(crate) fn chebyshev_first(n: usize) -> (Vec<f64>, Vec<f64>) {
    let m = (n + 1) / 2;
    let nf = n as f64;
    let x = (1..=m)
        .map(|j| ((2 * j - 1) as f64 * PI / (2.0 * nf)).cos())
        .collect();
    expand_symmetric(x, vec![PI / nf; m], n)
}

/// p(x) = sqrt(1-x^2) on [-1, 1].
pub(crate) fn chebyshev_second(n: usize) -> (Vec<f64>, Vec<f64>) {
    let m = (n + 1) / 2;
    let h = PI / (n as f64 + 1.0);
    let (x, w) = (1..=m)
        .map(|j| {
            let theta = j as f64 * h;
            let s = theta.sin();
            (theta.cos(), h * s * s)
        })
        .unzip();
    expand_symmetric(x, w, n)
}

/// p(x) = sqrt(x/(1-x)) on [0, 1].
pub(crate) fn sqrt_ratio(n: usize) -> (Vec<f64>, Vec<f64>) {
    let denom = 2.0 * n as f64 + 1.0;
    (1..=n)
        .map(|j| {
            let c = ((j as f64 - 0.5) * PI / denom).cos();
            let x = c * c;
            (x, 2.0 * PI * x / denom)
        })
        .unzip()
}

fn legendre_rule(n: usize, method: LegendreMethod) -> (Vec<f64>, Vec<f64>) {
    match method {
        LegendreMethod::HighOrder => legendre::high_order(n),
        LegendreMethod::Recurrence => legendre::recurrence(n),
    }
}

/// p(x) = 1/sqrt(1-x) on [0, 1], from the non-negative half of a
/// 2n-point Gauss-Legendre rule.
pub(crate) fn inverse_sqrt(n: usize, method: LegendreMethod) -> (Vec<f64>, Vec<f64>) {
    let (t, w) = legendre_rule(2 * n, method);
    t.iter()
        .zip(w.iter())
        .filter(|&(&ti, _)| ti >= 0.0)
        .map(|(&ti, &wi)| (1.0 - ti * ti, 2.0 * wi))
        .unzip()
}

/// p(x) = sqrt(1-x) on [0, 1], from the positive half of a
/// (2n+1)-point Gauss-Legendre rule.
pub(crate) fn sqrt_weight(n: usize, method: LegendreMethod) -> (Vec<f64>, Vec<f64>) {
    let (t, w) = legendre_rule(2 * n + 1, method);
    t.iter()
        .zip(w.iter())
        .filter(|&(&ti, _)| ti > 0.0)
        .map(|(&ti, &wi)| (1.0 - ti * ti, 2.0 * ti * ti * wi))
        .unzip()
}
