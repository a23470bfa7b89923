use super::*;
use crate::error::QuadError;
use crate::rules::{LegendreMethod, QuadratureTable, WeightFunction};
use core::f64::consts::PI;
use ndarray::{arr0, arr1, arr2, Array2, ArrayD, ArrayView2};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn scalar(v: f64) -> ArrayD<f64> {
    arr0(v).into_dyn()
}

fn vector(v: &[f64]) -> ArrayD<f64> {
    arr1(v).into_dyn()
}

// ======================== dea3 / richardson ========================

#[test]
fn dea3_converged_sequence_returns_last() {
    let (r, e) = dea3(1.0_f64, 1.0, 1.0);
    assert_eq!(r, 1.0);
    assert!(e < 1e-14);
}

#[test]
fn dea3_geometric_sequence_is_exact() {
    // 1 + q + q² + … partial sums; the epsilon algorithm is exact here.
    let q = 0.5_f64;
    let s0 = 1.0;
    let s1 = s0 + q;
    let s2 = s1 + q * q;
    let (r, _) = dea3(s0, s1, s2);
    approx_eq(r, 2.0, 1e-14);
}

#[test]
fn dea3_f32() {
    let (r, _) = dea3(1.0_f32, 1.5, 1.75);
    assert!((r - 2.0).abs() < 1e-5);
}

#[test]
fn richardson_removes_second_order_error() {
    // q_k = 1 + 4^-k: the rate estimate recovers c = 3.
    let q: Vec<f64> = (0..4).map(|k| 1.0 + 0.25_f64.powi(k)).collect();
    approx_eq(richardson(&q, 3), 1.0, 1e-14);
}

#[test]
fn richardson_f32() {
    let q: Vec<f32> = (0..4).map(|k| 1.0 + 0.25_f32.powi(k)).collect();
    assert!((richardson(&q, 3) - 1.0).abs() < 1e-5);
}

#[test]
fn richardson_zero_step_returns_last() {
    let q = [1.0_f64, 2.0, 2.0];
    assert_eq!(richardson(&q, 2), 2.0);
}

// ======================== Clenshaw-Curtis ========================

#[test]
fn clencurt_exp() {
    let sol = clencurt(f64::exp, scalar(0.0).view(), scalar(2.0).view(), 5).unwrap();
    assert_eq!(sol.values.shape(), &[1]);
    approx_eq(sol.values[[0]], 2f64.exp_m1(), 1e-12);
    assert!(sol.errors[[0]] < 1e-10);
    assert_eq!(sol.evals, 11);
}

#[test]
fn clencurt_exact_for_degree_two_n() {
    let sol = clencurt(|x: f64| x.powi(10), scalar(-1.0).view(), scalar(1.0).view(), 5).unwrap();
    approx_eq(sol.values[[0]], 2.0 / 11.0, 1e-14);
}

#[test]
fn clencurt_high_order_runge() {
    // 401 points; the cosine sum must stay accurate at this size.
    let sol = clencurt(
        |x: f64| 1.0 / (1.0 + 25.0 * x * x),
        scalar(-1.0).view(),
        scalar(1.0).view(),
        200,
    )
    .unwrap();
    approx_eq(sol.values[[0]], 0.4 * 5f64.atan(), 1e-13);
    assert_eq!(sol.evals, 401);
}

#[test]
fn clencurt_batch_keeps_shape() {
    let a = arr2(&[[0.0, 1.0], [1.0, 0.0]]).into_dyn();
    let b = scalar(3.0);
    let sol = clencurt(|x: f64| x * x, a.view(), b.view(), 2).unwrap();
    assert_eq!(sol.values.shape(), &[2, 2]);
    approx_eq(sol.values[[0, 0]], 9.0, 1e-13);
    approx_eq(sol.values[[0, 1]], 26.0 / 3.0, 1e-13);
    approx_eq(sol.values[[1, 0]], 26.0 / 3.0, 1e-13);
}

#[test]
fn clencurt_rejects_zero_order() {
    assert!(matches!(
        clencurt(f64::exp, scalar(0.0).view(), scalar(1.0).view(), 0),
        Err(QuadError::InvalidParameter(_))
    ));
}

#[test]
fn clencurt_rejects_unbroadcastable_limits() {
    let a = vector(&[0.0, 1.0]);
    let b = vector(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        clencurt(f64::exp, a.view(), b.view(), 3),
        Err(QuadError::ShapeMismatch(_, _))
    ));
}

fn sample_table(n: usize, a: f64, b: f64) -> Array2<f64> {
    // Rows from a to b: reverse of cos(πk/n).
    Array2::from_shape_fn((n + 1, 3), |(r, col)| {
        let k = n - r;
        let x = (PI * k as f64 / n as f64).cos() * (b - a) / 2.0 + (b + a) / 2.0;
        match col {
            0 => x,
            1 => x.exp(),
            _ => x * x,
        }
    })
}

#[test]
fn clencurt_samples_matches_callable() {
    let table = sample_table(10, 0.0, 2.0);
    let sol = clencurt_samples(table.view(), 0.0, 2.0).unwrap();
    assert_eq!(sol.values.shape(), &[2]);
    let direct = clencurt(f64::exp, scalar(0.0).view(), scalar(2.0).view(), 5).unwrap();
    approx_eq(sol.values[[0]], direct.values[[0]], 1e-14);
    approx_eq(sol.values[[1]], 8.0 / 3.0, 1e-13);
    assert_eq!(sol.evals, 0);
}

#[test]
fn clencurt_samples_abscissa_mismatch() {
    let mut table = sample_table(6, 0.0, 1.0);
    table[[2, 0]] += 1e-6;
    assert_eq!(
        clencurt_samples(table.view(), 0.0, 1.0).unwrap_err(),
        QuadError::AbscissaMismatch
    );
    // Wrong interval altogether.
    let table = sample_table(6, 0.0, 1.0);
    assert_eq!(
        clencurt_samples(table.view(), 0.0, 2.0).unwrap_err(),
        QuadError::AbscissaMismatch
    );
}

#[test]
fn clencurt_samples_rejects_bad_tables() {
    let even = Array2::<f64>::zeros((4, 2));
    assert!(matches!(clencurt_samples(even.view(), 0.0, 1.0), Err(QuadError::InvalidParameter(_))));
    let no_values = Array2::<f64>::zeros((5, 1));
    assert!(matches!(
        clencurt_samples(no_values.view(), 0.0, 1.0),
        Err(QuadError::InvalidParameter(_))
    ));
}

// ======================== Romberg ========================

#[test]
fn romberg_square() {
    let r = romberg(|x: f64| x * x, 0.0, 1.0, &RombergSettings::default()).unwrap();
    approx_eq(r.value, 1.0 / 3.0, 1e-12);
    assert!(r.converged);
    assert!(r.error <= 1e-3);
}

#[test]
fn romberg_sqrt() {
    let settings = RombergSettings {
        rel_tol: 0.0,
        abs_tol: 1e-4,
        ..Default::default()
    };
    let r = romberg(f64::sqrt, 0.0, 10.0, &settings).unwrap();
    approx_eq(r.value, 2.0 / 3.0 * 10f64.powf(1.5), 1e-4);
    assert!(r.error < 1e-4);
    assert!(r.converged);
}

#[test]
fn romberg_tight_tolerance() {
    let settings = RombergSettings {
        rel_tol: 1e-12,
        abs_tol: 1e-12,
        ..Default::default()
    };
    let r = romberg(f64::sin, 0.0, PI, &settings).unwrap();
    approx_eq(r.value, 2.0, 1e-10);
    assert!(r.evals > 2);
}

#[test]
fn romberg_reversed_and_empty() {
    let s = RombergSettings::default();
    let fwd = romberg(f64::exp, 0.0, 1.0, &s).unwrap();
    let rev = romberg(f64::exp, 1.0, 0.0, &s).unwrap();
    assert_eq!(fwd.value, -rev.value);

    let empty = romberg(f64::exp, 2.0, 2.0, &s).unwrap();
    assert_eq!(empty.value, 0.0);
    assert_eq!(empty.evals, 0);
}

#[test]
fn romberg_rejects_infinite_limits() {
    let s = RombergSettings::default();
    assert!(romberg(f64::exp, 0.0, f64::INFINITY, &s).is_err());
    assert!(romberg(f64::exp, f64::NAN, 1.0, &s).is_err());
}

#[test]
fn romberg_exhausted_table_reports_unconverged() {
    let settings = RombergSettings {
        rel_tol: 0.0,
        abs_tol: 0.0,
        max_doublings: 4,
        ..Default::default()
    };
    let r = romberg(f64::sqrt, 0.0, 1.0, &settings).unwrap();
    assert!(!r.converged);
    assert_eq!(r.iterations, 3);
}

#[test]
fn romberg_f32() {
    let r = romberg(|x: f32| x * x, 0.0_f32, 1.0, &RombergSettings::default()).unwrap();
    assert!((r.value - 1.0 / 3.0).abs() < 1e-5);
}

// ======================== Adaptive Gauss ========================

#[test]
fn gaussq_batch_of_squares() {
    let a = vector(&[0.0, 1.0]);
    let b = vector(&[2.0, 4.0]);
    let sol = gaussq(|x: f64| x * x, a.view(), b.view(), &[], &GaussSettings::default()).unwrap();
    approx_eq(sol.values[[0]], 8.0 / 3.0, 1e-12);
    approx_eq(sol.values[[1]], 21.0, 1e-12);
    assert!(sol.errors.iter().all(|&e| e < 1e-3));
    assert!(sol.converged());
    assert_eq!(sol.iterations, 2);
    assert_eq!(sol.nodes, 4);
    assert_eq!(sol.evals, 2 * 2 + 2 * 4);
}

#[test]
fn gaussq_scalar_limits_give_one_dimension() {
    let sol = gaussq(f64::exp, scalar(0.0).view(), scalar(1.0).view(), &[], &GaussSettings::default()).unwrap();
    assert_eq!(sol.values.shape(), &[1]);
    approx_eq(sol.values[[0]], 1f64.exp_m1(), 1e-8);
}

#[test]
fn gaussq_problems_converge_independently() {
    // sqrt converges far slower than a line, so the line leaves the batch
    // early and keeps its first converged value.
    let a = scalar(0.0);
    let b = scalar(1.0);
    let p = vector(&[0.0, 1.0]);
    let f = WithArgs(|x: f64, p: &[f64]| if p[0] == 0.0 { x } else { x.sqrt() });
    let settings = GaussSettings {
        rel_tol: 1e-10,
        abs_tol: 1e-10,
        max_iter: 14,
        ..Default::default()
    };
    let sol = gaussq(f, a.view(), b.view(), &[p.view()], &settings).unwrap();
    approx_eq(sol.values[[0]], 0.5, 1e-14);
    approx_eq(sol.values[[1]], 2.0 / 3.0, 1e-8);
    assert!(sol.evals < 2 * (2 + 4 + 8 + 16 + 32 + 64 + 128 + 256 + 512 + 1024 + 2048 + 4096 + 8192 + 16384));
}

#[test]
fn gaussq_laguerre_weight() {
    let settings = GaussSettings {
        weight: WeightFunction::Laguerre,
        alpha: 2.0,
        ..Default::default()
    };
    let sol = gaussq(|_: f64| 1.0, scalar(0.0).view(), scalar(f64::INFINITY).view(), &[], &settings).unwrap();
    approx_eq(sol.values[[0]], 2.0, 1e-12);
    assert!(sol.errors[[0]] < 1e-12);

    let settings = GaussSettings {
        weight: WeightFunction::Laguerre,
        ..Default::default()
    };
    let sol = gaussq(|x: f64| x * x, scalar(0.0).view(), scalar(f64::INFINITY).view(), &[], &settings).unwrap();
    approx_eq(sol.values[[0]], 2.0, 1e-12);
}

#[test]
fn gaussq_hermite_weight() {
    let settings = GaussSettings {
        weight: WeightFunction::Hermite,
        ..Default::default()
    };
    let sol = gaussq(
        |x: f64| x * x,
        scalar(f64::NEG_INFINITY).view(),
        scalar(f64::INFINITY).view(),
        &[],
        &settings,
    )
    .unwrap();
    approx_eq(sol.values[[0]], PI.sqrt() / 2.0, 1e-12);
}

#[test]
fn gaussq_hermite_kink_stays_unconverged() {
    // |x| converges like 1/n under the Hermite weight, so a 1e-12 target is
    // out of reach; the large rules must be accurate and the batch flagged.
    let settings = GaussSettings {
        weight: WeightFunction::Hermite,
        rel_tol: 1e-12,
        abs_tol: 1e-12,
        ..Default::default()
    };
    let sol = gaussq(
        |x: f64| x.abs(),
        scalar(f64::NEG_INFINITY).view(),
        scalar(f64::INFINITY).view(),
        &[],
        &settings,
    )
    .unwrap();
    approx_eq(sol.values[[0]], 1.0, 5e-3);
    assert!(sol.errors[[0]] > 1e-6);
    assert_eq!(sol.unconverged, 1);
}

#[test]
fn gaussq_weights_on_mapped_intervals() {
    let base = GaussSettings {
        rel_tol: 1e-12,
        abs_tol: 1e-12,
        ..Default::default()
    };
    let a = scalar(1.0);
    let b = scalar(3.0);
    // ∫_1^3 dx / sqrt((x-1)(3-x)) = π
    let s = GaussSettings { weight: WeightFunction::Chebyshev1, ..base };
    approx_eq(gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]], PI, 1e-12);
    // ∫_1^3 sqrt((x-1)(3-x)) dx = π/2
    let s = GaussSettings { weight: WeightFunction::Chebyshev2, ..base };
    approx_eq(gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]], PI / 2.0, 1e-12);
    // ∫_1^3 sqrt((x-1)/(3-x)) dx = π
    let s = GaussSettings { weight: WeightFunction::SqrtRatio, ..base };
    approx_eq(gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]], PI, 1e-12);
    // ∫_1^3 dx / sqrt(3-x) = 2 sqrt 2
    let s = GaussSettings { weight: WeightFunction::InvSqrtRight, ..base };
    approx_eq(
        gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]],
        2.0 * 2f64.sqrt(),
        1e-12,
    );
    // ∫_1^3 sqrt(3-x) dx = (2/3) 2^1.5
    let s = GaussSettings { weight: WeightFunction::SqrtRight, ..base };
    approx_eq(
        gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]],
        2.0 / 3.0 * 2f64.powf(1.5),
        1e-12,
    );
    // ∫_1^3 (3-x)(x-1)^2 dx = 4/3
    let s = GaussSettings {
        weight: WeightFunction::Jacobi,
        alpha: 1.0,
        beta: 2.0,
        ..base
    };
    approx_eq(
        gaussq(|_: f64| 1.0, a.view(), b.view(), &[], &s).unwrap().values[[0]],
        4.0 / 3.0,
        1e-12,
    );
}

#[test]
fn gaussq_extra_arguments_broadcast() {
    let a = scalar(0.0);
    let b = vector(&[1.0, 2.0]);
    let p = arr2(&[[1.0], [3.0]]).into_dyn();
    let f = WithArgs(|x: f64, p: &[f64]| p[0] * x);
    let sol = gaussq(f, a.view(), b.view(), &[p.view()], &GaussSettings::default()).unwrap();
    assert_eq!(sol.values.shape(), &[2, 2]);
    approx_eq(sol.values[[0, 0]], 0.5, 1e-14);
    approx_eq(sol.values[[0, 1]], 2.0, 1e-14);
    approx_eq(sol.values[[1, 0]], 1.5, 1e-14);
    approx_eq(sol.values[[1, 1]], 6.0, 1e-14);
}

#[test]
fn gaussq_vectorized_integrand() {
    let f = Vectorized::new(|x: ArrayView2<'_, f64>, _p: ArrayView2<'_, f64>| x.mapv(|v| v * v * v));
    let sol = gaussq(f, scalar(0.0).view(), scalar(2.0).view(), &[], &GaussSettings::default()).unwrap();
    approx_eq(sol.values[[0]], 4.0, 1e-13);
}

#[test]
fn gaussq_wrong_integrand_shape() {
    let f = Vectorized::new(|x: ArrayView2<'_, f64>, _p: ArrayView2<'_, f64>| Array2::zeros((x.nrows(), 1)));
    assert!(matches!(
        gaussq(f, scalar(0.0).view(), scalar(2.0).view(), &[], &GaussSettings::default()),
        Err(QuadError::ShapeMismatch(_, _))
    ));
}

#[test]
fn gaussq_nan_falls_back_to_previous_estimate() {
    // The integrand turns NaN once more than four nodes are requested. The
    // 4-node estimate is kept, and since it then stops changing the problem
    // counts as converged.
    let f = Vectorized::new(|x: ArrayView2<'_, f64>, _p: ArrayView2<'_, f64>| {
        if x.ncols() > 4 {
            Array2::from_elem(x.raw_dim(), f64::NAN)
        } else {
            x.mapv(f64::sqrt)
        }
    });
    let settings = GaussSettings {
        rel_tol: 1e-12,
        abs_tol: 1e-12,
        max_iter: 6,
        ..Default::default()
    };
    let sol = gaussq(f, scalar(0.0).view(), scalar(1.0).view(), &[], &settings).unwrap();
    let four_node = crate::rules::p_roots(4, LegendreMethod::HighOrder, 0.0, 1.0)
        .unwrap()
        .integrate(f64::sqrt);
    approx_eq(sol.values[[0]], four_node, 1e-14);
    assert!(sol.values[[0]].is_finite());
    assert_eq!(sol.iterations, 3);
    assert_eq!(sol.errors[[0]], 0.0);
    assert!(sol.converged());
}

#[test]
fn gaussq_unconverged_is_reported() {
    let settings = GaussSettings {
        rel_tol: 1e-15,
        abs_tol: 1e-15,
        max_iter: 3,
        ..Default::default()
    };
    let a = vector(&[0.0, 0.0, 0.0]);
    let b = vector(&[1.0, 1.0, 1.0]);
    let sol = gaussq(|x: f64| x.sqrt(), a.view(), b.view(), &[], &settings).unwrap();
    assert_eq!(sol.unconverged, 3);
    assert_eq!(sol.iterations, 3);
    assert_eq!(sol.nodes, 8);
    assert!(sol.values.iter().all(|v| (v - 2.0 / 3.0).abs() < 1e-2));
}

#[test]
fn gaussq_invalid_parameters() {
    let s = GaussSettings {
        weight: WeightFunction::Jacobi,
        alpha: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        gaussq(f64::exp, scalar(0.0).view(), scalar(1.0).view(), &[], &s),
        Err(QuadError::InvalidParameter(_))
    ));
    let s = GaussSettings {
        initial_nodes: 0,
        ..Default::default()
    };
    assert!(gaussq(f64::exp, scalar(0.0).view(), scalar(1.0).view(), &[], &s).is_err());
}

#[test]
fn gaussq_with_private_table() {
    let table = QuadratureTable::new(LegendreMethod::Recurrence);
    let sol = gaussq_with_table(
        &table,
        f64::cos,
        scalar(0.0).view(),
        scalar(PI / 2.0).view(),
        &[],
        &GaussSettings::default(),
    )
    .unwrap();
    approx_eq(sol.values[[0]], 1.0, 1e-6);
    assert_eq!(table.len(), sol.iterations);
}

// ======================== QuadGR ========================

#[test]
fn quadgr_square() {
    let r = quadgr(|x: f64| x * x, 0.0, 1.0, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, 1.0 / 3.0, 1e-14);
    assert!(r.converged);
    assert!(r.error > 0.0);
}

#[test]
fn quadgr_exp_decay_to_infinity() {
    let r = quadgr(|x: f64| (-x).exp(), 0.0, f64::INFINITY, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, 1.0, 1e-6);
    assert!(r.converged);
}

#[test]
fn quadgr_negative_half_line() {
    let r = quadgr(f64::exp, f64::NEG_INFINITY, 0.0, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, 1.0, 1e-6);
}

#[test]
fn quadgr_whole_line() {
    let settings = QuadgrSettings {
        abs_tol: 1e-9,
        ..Default::default()
    };
    let r = quadgr(|x: f64| (-x * x).exp(), f64::NEG_INFINITY, f64::INFINITY, &settings).unwrap();
    approx_eq(r.value, PI.sqrt(), 1e-9);
    assert!(r.error < 1e-9);
}

#[test]
fn quadgr_damped_cosine() {
    let settings = QuadgrSettings {
        abs_tol: 1e-9,
        ..Default::default()
    };
    let r = quadgr(|x: f64| x.cos() * (-x).exp(), 0.0, f64::INFINITY, &settings).unwrap();
    approx_eq(r.value, 0.5, 1e-9);
}

#[test]
fn quadgr_endpoint_singularities() {
    let r = quadgr(f64::ln, 0.0, 1.0, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, -1.0, 1e-10);

    let r = quadgr(|x: f64| x.powf(-0.75), 0.0, 1.0, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, 4.0, 1e-10);
    assert!(r.error < 1e-10);
}

#[test]
fn quadgr_quarter_circle() {
    let settings = QuadgrSettings {
        abs_tol: 1e-12,
        ..Default::default()
    };
    let r = quadgr(|x: f64| (4.0 - x * x).sqrt(), 0.0, 2.0, &settings).unwrap();
    approx_eq(r.value, PI, 1e-11);
}

#[test]
fn quadgr_degenerate_interval() {
    let mut calls = 0;
    let r = quadgr(
        |x: f64| {
            calls += 1;
            x
        },
        1.5,
        1.5,
        &QuadgrSettings::default(),
    )
    .unwrap();
    assert_eq!(r.value, 0.0);
    assert_eq!(r.error, 0.0);
    assert_eq!(r.iterations, 0);
    assert_eq!(calls, 0);
}

#[test]
fn quadgr_reversed_limits() {
    let fwd = quadgr(f64::exp, 0.0, 2.0, &QuadgrSettings::default()).unwrap();
    let rev = quadgr(f64::exp, 2.0, 0.0, &QuadgrSettings::default()).unwrap();
    assert_eq!(fwd.value, -rev.value);
    approx_eq(fwd.value, 2f64.exp_m1(), 1e-12);

    let r = quadgr(|x: f64| (-x).exp(), f64::INFINITY, 0.0, &QuadgrSettings::default()).unwrap();
    approx_eq(r.value, -1.0, 1e-6);
}

#[test]
fn quadgr_nan_limits() {
    let s = QuadgrSettings::default();
    assert_eq!(
        quadgr(f64::exp, f64::NAN, f64::INFINITY, &s).unwrap_err(),
        QuadError::NonRealBound
    );
    assert!(matches!(
        quadgr(f64::exp, f64::NAN, 1.0, &s),
        Err(QuadError::InvalidParameter(_))
    ));
    let s = QuadgrSettings {
        abs_tol: 1e-5,
        max_iter: 1,
    };
    assert!(quadgr(f64::exp, 0.0, 1.0, &s).is_err());
}

#[test]
fn quadgr_non_finite_estimate_stops() {
    let r = quadgr(|x: f64| 1.0 / (x - 0.5), 0.0, 1.0, &QuadgrSettings::default()).unwrap();
    // Nodes never hit 0.5 exactly, so the estimate stays finite.
    assert!(r.value.is_finite());

    let r = quadgr(|_: f64| f64::NAN, 0.0, 1.0, &QuadgrSettings::default()).unwrap();
    assert!(r.value.is_nan());
    assert!(!r.converged);
    assert_eq!(r.iterations, 2);
}

#[test]
fn quadgr_max_iterations_reached() {
    let settings = QuadgrSettings {
        abs_tol: 0.0,
        max_iter: 4,
    };
    let r = quadgr(f64::sin, 0.0, 1.0, &settings).unwrap();
    assert!(!r.converged);
    assert_eq!(r.iterations, 4);
    assert_eq!(r.evals, 12 * (1 + 2 + 4 + 8));
    approx_eq(r.value, 1.0 - 1f64.cos(), 1e-14);
}

#[test]
fn quadgr_f32() {
    let r = quadgr(|x: f32| x * x, 0.0_f32, 3.0, &QuadgrSettings::default()).unwrap();
    assert!((r.value - 9.0).abs() < 1e-4);
}

#[test]
fn quadgr_f32_infinite_limit() {
    let r = quadgr(|x: f32| (-x).exp(), 0.0_f32, f32::INFINITY, &QuadgrSettings::default()).unwrap();
    assert!((r.value - 1.0).abs() < 1e-3);
    assert!(r.error.is_finite());
}
