use std::cell::Cell;

use approx::assert_abs_diff_eq;

use compphys::math::integrate::compositerule::CompositeRule;
use compphys::math::integrate::diagnostic::RecordingSink;
use compphys::math::integrate::integrand::{
    IntegrandFn,
    QuadratureMethod
};
use compphys::math::integrate::legendre::{
    legendre,
    legendre_with_sink,
    MAX_LEGENDRE_ORDER
};
use compphys::math::integrate::milne::milne;
use compphys::math::integrate::quadratureerror::QuadratureError;
use compphys::math::integrate::simpson::simpson;

fn cube(x: f64) -> f64 {
    x * x * x
}

#[test]
fn end_to_end_scenarios() {
    let result = simpson(0.0, 1.0, 11, |x| x * x).unwrap();
    assert_abs_diff_eq!(result, 1.0 / 3.0, epsilon = 1e-12);

    let result = milne(0.0, 1.0, 9, |x| x * x * x * x * x).unwrap();
    assert_abs_diff_eq!(result, 1.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn zero_meshsize_never_evaluates() {
    let calls = Cell::new(0);
    let probe = |x: f64| {
        calls.set(calls.get() + 1);
        x.exp()
    };
    for (begin, end) in [(0.0, 1.0), (5.0, -3.0), (-1e6, 1e6)] {
        assert_eq!(simpson(begin, end, 0, &probe), Ok(0.0));
        assert_eq!(milne(begin, end, 0, &probe), Ok(0.0));
        assert_eq!(legendre(begin, end, 0, &probe), Ok(0.0));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn negative_meshsize_never_evaluates() {
    let calls = Cell::new(0);
    let probe = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };
    for meshsize in [-1, -2, -100, i64::MIN] {
        let expected = Err(QuadratureError::InvalidArgument { meshsize });
        assert_eq!(simpson(0.0, 1.0, meshsize, &probe), expected);
        assert_eq!(milne(0.0, 1.0, meshsize, &probe), expected);
        assert_eq!(legendre(0.0, 1.0, meshsize, &probe), expected);
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn polynomial_exactness() {
    // Simpson：3 次以下；Milne：5 次以下
    let cubic = |x: f64| 2.0 * x * x * x - x * x + 4.0;
    let cubic_exact = |a: f64, b: f64| {
        let antiderivative = |x: f64| 0.5 * x.powi(4) - x.powi(3) / 3.0 + 4.0 * x;
        antiderivative(b) - antiderivative(a)
    };
    let quintic = |x: f64| x.powi(5) - 3.0 * x.powi(3) + x;
    let quintic_exact = |a: f64, b: f64| {
        let antiderivative = |x: f64| x.powi(6) / 6.0 - 0.75 * x.powi(4) + 0.5 * x * x;
        antiderivative(b) - antiderivative(a)
    };

    for (a, b) in [(0.0, 1.0), (-2.0, 3.0), (1.5, -0.5)] {
        for meshsize in [2, 3, 10, 25, 101] {
            assert_abs_diff_eq!(simpson(a, b, meshsize, cubic).unwrap(), cubic_exact(a, b), epsilon = 1e-9);
            assert_abs_diff_eq!(milne(a, b, meshsize, quintic).unwrap(), quintic_exact(a, b), epsilon = 1e-9);
        }
    }
}

#[test]
fn convergence_for_exp() {
    let exact = std::f64::consts::E - 1.0;
    let meshsizes = [5, 9, 17, 33, 65, 129];

    let simpson_errors: Vec<f64> = meshsizes.iter()
        .map(|&m| (simpson(0.0, 1.0, m, f64::exp).unwrap() - exact).abs())
        .collect();
    let milne_errors: Vec<f64> = meshsizes.iter()
        .map(|&m| (milne(0.0, 1.0, m, f64::exp).unwrap() - exact).abs())
        .collect();

    // 直到接近捨入誤差為止，誤差單調遞減
    let floor = 1e-14;
    for errors in [&simpson_errors, &milne_errors] {
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0] || pair[1] < floor, "{:?}", errors);
        }
    }
    // Simpson 誤差每次約縮小 16 倍
    assert!(simpson_errors[2] / simpson_errors[3] > 12.0);
}

#[test]
fn effective_meshsize_is_idempotent_in_results() {
    for requested in 1..40_i64 {
        let m = CompositeRule::Simpson.effective_meshsize(requested).unwrap() as i64;
        assert_eq!(
            simpson(0.0, 2.0, requested, f64::sin).unwrap().to_bits(),
            simpson(0.0, 2.0, m, f64::sin).unwrap().to_bits()
        );

        let m = CompositeRule::Milne.effective_meshsize(requested).unwrap() as i64;
        assert_eq!(
            milne(0.0, 2.0, requested, f64::sin).unwrap().to_bits(),
            milne(0.0, 2.0, m, f64::sin).unwrap().to_bits()
        );
    }
}

#[test]
fn function_pointer_method_table() {
    let methods: [QuadratureMethod; 3] = [
        simpson::<IntegrandFn>,
        milne::<IntegrandFn>,
        legendre::<IntegrandFn>
    ];
    for method in methods {
        let result = method(-1.0, 1.0, 9, cube).unwrap();
        assert_abs_diff_eq!(result, 0.0, epsilon = 1e-14);
    }
}

#[test]
fn legendre_failure_is_a_silent_zero() {
    let sink = RecordingSink::new();
    let result = legendre_with_sink(0.0, 1.0, 2 * MAX_LEGENDRE_ORDER as i64, f64::exp, &sink);
    assert_eq!(result, Ok(0.0));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.diagnostics()[0].component(), "legendre");

    let result = legendre_with_sink(0.0, 1.0, 12, f64::exp, &sink).unwrap();
    assert_abs_diff_eq!(result, std::f64::consts::E - 1.0, epsilon = 1e-14);
    assert_eq!(sink.len(), 1);
}
