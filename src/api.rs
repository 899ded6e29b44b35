use crate::dual::Dual;
use crate::float::Float;
use crate::hyperdual::HyperDual;

/// Value and derivative of a scalar function `f : R → R` at `x`.
///
/// ```
/// let (val, der) = tangent::derivative(|x| x * x + x, 3.0);
/// assert!((val - 12.0).abs() < 1e-12);
/// assert!((der - 7.0).abs() < 1e-12);
/// ```
pub fn derivative<F: Float>(f: impl FnOnce(Dual<F>) -> Dual<F>, x: F) -> (F, F) {
    let out = f(Dual::variable(x));
    (out.re, out.dx)
}

/// Value and gradient of a scalar function `f : R^n → R` at `x`, one forward
/// pass per input coordinate.
///
/// ```
/// let (val, g) = tangent::gradient(|x| x[0] * x[0] + x[1] * x[1], &[3.0, 4.0]);
/// assert!((val - 25.0).abs() < 1e-12);
/// assert!((g[0] - 6.0).abs() < 1e-12);
/// assert!((g[1] - 8.0).abs() < 1e-12);
/// ```
pub fn gradient<F: Float>(f: impl Fn(&[Dual<F>]) -> Dual<F>, x: &[F]) -> (F, Vec<F>) {
    let n = x.len();

    // Constant pass for the value, then one seeded pass per coordinate.
    let const_inputs: Vec<Dual<F>> = x.iter().map(|&xi| Dual::constant(xi)).collect();
    let value = f(&const_inputs).re;

    let mut grad = Vec::with_capacity(n);
    for j in 0..n {
        let inputs: Vec<Dual<F>> = x
            .iter()
            .enumerate()
            .map(|(k, &xi)| {
                if k == j {
                    Dual::variable(xi)
                } else {
                    Dual::constant(xi)
                }
            })
            .collect();
        grad.push(f(&inputs).dx);
    }

    (value, grad)
}

/// Result of a [`mixed_partial`] evaluation: the value, both first partials,
/// and the mixed second partial of `f(x, y)`.
#[derive(Clone, Copy, Debug)]
pub struct MixedPartials<F: Float> {
    /// `f(x, y)`.
    pub value: F,
    /// `∂f/∂x`.
    pub dx: F,
    /// `∂f/∂y`.
    pub dy: F,
    /// `∂²f/∂x∂y`.
    pub dxy: F,
}

/// Evaluate a bivariate function over hyperduals, returning the value, both
/// first partials, and the mixed second partial in a single pass.
///
/// ```
/// let p = tangent::mixed_partial(|x, y| x * x * y, 2.0, 5.0);
/// assert!((p.value - 20.0).abs() < 1e-12);
/// assert!((p.dx - 20.0).abs() < 1e-12);
/// assert!((p.dy - 4.0).abs() < 1e-12);
/// assert!((p.dxy - 4.0).abs() < 1e-12);
/// ```
pub fn mixed_partial<F: Float>(
    f: impl FnOnce(HyperDual<F>, HyperDual<F>) -> HyperDual<F>,
    x: F,
    y: F,
) -> MixedPartials<F> {
    let (hx, hy) = HyperDual::variables(x, y);
    let out = f(hx, hy);
    MixedPartials {
        value: out.re,
        dx: out.dx,
        dy: out.dy,
        dxy: out.dxy,
    }
}
