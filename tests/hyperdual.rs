use approx::assert_relative_eq;
use tangent::{HyperDual, HyperDual64};

/// Four-point central difference for the mixed partial ∂²f/∂x∂y.
fn finite_mixed(f: impl Fn(f64, f64) -> f64, x: f64, y: f64) -> f64 {
    let h = 1e-4;
    (f(x + h, y + h) - f(x + h, y - h) - f(x - h, y + h) + f(x - h, y - h)) / (4.0 * h * h)
}

/// Check a bivariate expression against analytic or finite-difference
/// partials in one shot.
fn check_partials(out: HyperDual64, value: f64, dx: f64, dy: f64, dxy: f64, tol: f64) {
    assert_relative_eq!(out.re, value, max_relative = tol);
    assert_relative_eq!(out.dx, dx, max_relative = tol);
    assert_relative_eq!(out.dy, dy, max_relative = tol);
    assert_relative_eq!(out.dxy, dxy, max_relative = tol);
}

// ── Algebraic core ──

#[test]
fn add_sub_componentwise() {
    let u = HyperDual::new(1.0, 2.0, 3.0, 4.0);
    let v = HyperDual::new(10.0, 20.0, 30.0, 40.0);
    let s = u + v;
    check_partials(s, 11.0, 22.0, 33.0, 44.0, 1e-12);
    let d = v - u;
    check_partials(d, 9.0, 18.0, 27.0, 36.0, 1e-12);
}

#[test]
fn product_rule_cross_term() {
    // f(x,y) = x·y: dx = y, dy = x, dxy = 1
    let (x, y) = HyperDual::variables(2.0, 3.0);
    let f = x * y;
    check_partials(f, 6.0, 3.0, 2.0, 1.0, 1e-12);
}

#[test]
fn product_of_squares() {
    // f(x,y) = x²·y: dx = 2xy, dy = x², dxy = 2x
    let (x, y) = HyperDual::variables(2.0, 5.0);
    let f = x * x * y;
    check_partials(f, 20.0, 20.0, 4.0, 4.0, 1e-12);
}

#[test]
fn power_rule_curvature_term() {
    // f(x,y) = (x·y)³: dxy = 9x²y²
    let (x, y) = HyperDual::variables(2.0, 1.5);
    let f = (x * y).powf(3.0);
    let (xv, yv): (f64, f64) = (2.0, 1.5);
    check_partials(
        f,
        (xv * yv).powi(3),
        3.0 * xv.powi(2) * yv.powi(3),
        3.0 * xv.powi(3) * yv.powi(2),
        9.0 * xv.powi(2) * yv.powi(2),
        1e-12,
    );
}

#[test]
fn powi_matches_powf() {
    let (x, y) = HyperDual::variables(1.3, 0.7);
    let u = x * y + x;
    let a = u.powi(4);
    let b = u.powf(4.0);
    assert_relative_eq!(a.re, b.re, max_relative = 1e-12);
    assert_relative_eq!(a.dx, b.dx, max_relative = 1e-12);
    assert_relative_eq!(a.dy, b.dy, max_relative = 1e-12);
    assert_relative_eq!(a.dxy, b.dxy, max_relative = 1e-12);
}

#[test]
fn divide_via_power() {
    // f(x,y) = x/y: dx = 1/y, dy = −x/y², dxy = −1/y²
    let (x, y) = HyperDual::variables(3.0, 4.0);
    let f = x / y;
    check_partials(f, 0.75, 0.25, -3.0 / 16.0, -1.0 / 16.0, 1e-12);
}

#[test]
fn divide_cross_term_fixture() {
    // ((x·y)/z) + (x·z) − 1 with x in ε₁, z in ε₂, y constant
    let x = HyperDual::new(7.0, 1.0, 0.0, 0.0);
    let y = HyperDual::<f64>::constant(3.0);
    let z = HyperDual::new(-2.0, 0.0, 1.0, 0.0);
    let f = ((x * y) / z) + (x * z) - 1.0;
    check_partials(f, -25.5, -3.5, 1.75, 0.25, 1e-12);
}

#[test]
fn division_by_zero_propagates() {
    let (x, y) = HyperDual::variables(1.0, 0.0);
    let f = x / y;
    assert!(f.re.is_infinite() || f.re.is_nan());
}

#[test]
fn cross_term_is_symmetric() {
    // Swapping which operand carries which perturbation must not change the
    // mixed partial of a commutative expression.
    let f = |a: HyperDual64, b: HyperDual64| a * b + a + b;
    let ab = f(HyperDual::variable_x(2.0), HyperDual::variable_y(3.0));
    let ba = f(HyperDual::variable_y(2.0), HyperDual::variable_x(3.0));
    assert_relative_eq!(ab.dxy, ba.dxy, max_relative = 1e-12);
    assert_relative_eq!(ab.re, ba.re, max_relative = 1e-12);
}

#[test]
fn constants_are_inert() {
    let (x, y) = HyperDual::variables(2.0, 3.0);
    let c = HyperDual::from(5.0);
    let f = x * y * c;
    check_partials(f, 30.0, 15.0, 10.0, 5.0, 1e-12);
    let g = x * y + c;
    check_partials(g, 11.0, 3.0, 2.0, 1.0, 1e-12);
}

#[test]
fn mixed_scalar_ops() {
    let (x, y) = HyperDual::variables(2.0, 3.0);
    let f = 2.0 * x * y - 1.0;
    check_partials(f, 11.0, 6.0, 4.0, 2.0, 1e-12);
    let g = 6.0 / y;
    assert_relative_eq!(g.re, 2.0, max_relative = 1e-12);
    assert_relative_eq!(g.dy, -2.0 / 3.0, max_relative = 1e-12);
}

// ── Elementary extensions ──

#[test]
fn sqrt_mixed_partial() {
    // ∂²√(xy)/∂x∂y = 1/(4√(xy))
    let (x, y) = HyperDual::variables(2.0, 8.0);
    let f = (x * y).sqrt();
    check_partials(f, 4.0, 1.0, 0.25, 1.0 / 16.0, 1e-12);
}

#[test]
fn exp_mixed_partial() {
    // ∂²e^(xy)/∂x∂y = e^(xy)·(1 + xy)
    let (xv, yv): (f64, f64) = (1.5, 0.5);
    let (x, y) = HyperDual::variables(xv, yv);
    let f = (x * y).exp();
    let e = (xv * yv).exp();
    check_partials(f, e, yv * e, xv * e, e * (1.0 + xv * yv), 1e-12);
}

#[test]
fn ln_mixed_partial_vanishes() {
    // ln(xy) = ln x + ln y, so the mixed partial is exactly zero.
    let (x, y) = HyperDual::variables(3.0, 7.0);
    let f = (x * y).ln();
    assert_relative_eq!(f.re, 21.0_f64.ln(), max_relative = 1e-12);
    assert_relative_eq!(f.dx, 1.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(f.dy, 1.0 / 7.0, max_relative = 1e-12);
    assert_relative_eq!(f.dxy, 0.0, epsilon = 1e-12);
}

#[test]
fn sin_mixed_partial() {
    // ∂²sin(xy)/∂x∂y = cos(xy) − xy·sin(xy)
    let (xv, yv): (f64, f64) = (1.0, 0.5);
    let (x, y) = HyperDual::variables(xv, yv);
    let f = (x * y).sin();
    let p = xv * yv;
    check_partials(
        f,
        p.sin(),
        yv * p.cos(),
        xv * p.cos(),
        p.cos() - p * p.sin(),
        1e-12,
    );
}

#[test]
fn cos_against_finite_difference() {
    let (xv, yv): (f64, f64) = (0.8, 1.2);
    let (x, y) = HyperDual::variables(xv, yv);
    let f = (x * y).cos();
    let expected = finite_mixed(|a, b| (a * b).cos(), xv, yv);
    assert_relative_eq!(f.dxy, expected, max_relative = 1e-5);
}

#[test]
fn tan_against_finite_difference() {
    let (xv, yv): (f64, f64) = (0.4, 0.3);
    let (x, y) = HyperDual::variables(xv, yv);
    let f = (x * y).tan();
    let expected = finite_mixed(|a, b| (a * b).tan(), xv, yv);
    assert_relative_eq!(f.dxy, expected, max_relative = 1e-5);
}

#[test]
fn hyperbolics_against_finite_difference() {
    let (xv, yv): (f64, f64) = (0.6, 0.9);
    let (x, y) = HyperDual::variables(xv, yv);

    let f = (x * y).sinh();
    assert_relative_eq!(
        f.dxy,
        finite_mixed(|a, b| (a * b).sinh(), xv, yv),
        max_relative = 1e-5
    );

    let g = (x * y).cosh();
    assert_relative_eq!(
        g.dxy,
        finite_mixed(|a, b| (a * b).cosh(), xv, yv),
        max_relative = 1e-5
    );

    let h = (x * y).tanh();
    assert_relative_eq!(
        h.dxy,
        finite_mixed(|a, b| (a * b).tanh(), xv, yv),
        max_relative = 1e-5
    );
}

#[test]
fn abs_negative_branch_negates_all_components() {
    // |−xy| = xy for positive x, y; the negative branch restores the sign
    // of every component.
    let (x, y) = HyperDual::variables(2.0, 3.0);
    let f = (x * y * (-1.0)).abs();
    check_partials(f, 6.0, 3.0, 2.0, 1.0, 1e-12);
}

#[test]
fn step_functions_zero_all_perturbations() {
    let (x, y) = HyperDual::variables(2.7, 1.4);
    let f = (x * y).floor();
    check_partials(f, 3.0, 0.0, 0.0, 0.0, 1e-12);
    let g = (x * y).ceil();
    check_partials(g, 4.0, 0.0, 0.0, 0.0, 1e-12);
}

// ── Numeric semantics ──

#[test]
fn comparisons_ignore_perturbations() {
    let u = HyperDual::new(2.0, 1.0, 2.0, 3.0);
    let v = HyperDual::new(2.0, -1.0, -2.0, -3.0);
    let w = HyperDual::new(5.0, 0.0, 0.0, 0.0);
    assert_eq!(u, v);
    assert!(u < w);
    assert!(w >= v);
    assert!(u != w);
}

#[test]
fn display_renders_all_components() {
    let h = HyperDual::new(1.5, 2.0, -3.0, 0.25);
    assert_eq!(format!("{}", h), "1.5 + 2ε₁ + -3ε₂ + 0.25ε₁ε₂");
}
