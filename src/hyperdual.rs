//! Hyperdual numbers for exact mixed second partials.
//!
//! [`HyperDual<F>`] carries two independent first-order perturbations and
//! their cross term, so a single evaluation of `f(x, y)` yields `∂f/∂x`,
//! `∂f/∂y`, and `∂²f/∂x∂y` with no truncation error.

use std::fmt::{self, Display};

use crate::Float;

/// Hyperdual number: `re + dx·ε₁ + dy·ε₂ + dxy·ε₁ε₂` with
/// `ε₁² = ε₂² = 0` and `ε₁ε₂ ≠ 0`.
///
/// A deliberately separate structure from [`Dual`](crate::Dual): the two
/// types never interoperate, and the second-order propagation rules do not
/// factor through the first-order ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct HyperDual<F: Float> {
    /// Value of the expression at the evaluation point.
    pub re: F,
    /// First derivative with respect to the first traced variable.
    pub dx: F,
    /// First derivative with respect to the second traced variable.
    pub dy: F,
    /// Mixed second partial `∂²f/∂x∂y`.
    pub dxy: F,
}

impl<F: Float> Display for HyperDual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}ε₁ + {}ε₂ + {}ε₁ε₂",
            self.re, self.dx, self.dy, self.dxy
        )
    }
}

impl<F: Float> From<F> for HyperDual<F> {
    #[inline]
    fn from(re: F) -> Self {
        HyperDual::constant(re)
    }
}

impl<F: Float> HyperDual<F> {
    /// Create a hyperdual number with explicit perturbation seeds.
    #[inline]
    pub fn new(re: F, dx: F, dy: F, dxy: F) -> Self {
        HyperDual { re, dx, dy, dxy }
    }

    /// Create a constant (all perturbations zero).
    #[inline]
    pub fn constant(re: F) -> Self {
        HyperDual {
            re,
            dx: F::zero(),
            dy: F::zero(),
            dxy: F::zero(),
        }
    }

    /// Create the first traced variable (unit seed in `ε₁`).
    #[inline]
    pub fn variable_x(re: F) -> Self {
        HyperDual {
            re,
            dx: F::one(),
            dy: F::zero(),
            dxy: F::zero(),
        }
    }

    /// Create the second traced variable (unit seed in `ε₂`).
    #[inline]
    pub fn variable_y(re: F) -> Self {
        HyperDual {
            re,
            dx: F::zero(),
            dy: F::one(),
            dxy: F::zero(),
        }
    }

    /// Seed a pair of variables for a mixed partial in one call.
    #[inline]
    pub fn variables(x: F, y: F) -> (Self, Self) {
        (Self::variable_x(x), Self::variable_y(y))
    }

    /// Apply the second-order chain rule for a scalar function `g`:
    /// value `g(a)`, first order `g'(a)·aᵢ`, cross term
    /// `g'(a)·a₁₂ + g''(a)·a₁·a₂`.
    #[inline]
    fn chain2(self, g_val: F, g_d1: F, g_d2: F) -> Self {
        HyperDual {
            re: g_val,
            dx: self.dx * g_d1,
            dy: self.dy * g_d1,
            dxy: self.dxy * g_d1 + self.dx * self.dy * g_d2,
        }
    }

    // ── Powers ──

    /// Raise to a plain real exponent. The `p(p−1)·a₁·a₂·a^(p−2)` term
    /// carries the curvature into the cross component.
    #[inline]
    pub fn powf(self, p: F) -> Self {
        self.chain2(
            self.re.powf(p),
            p * self.re.powf(p - F::one()),
            p * (p - F::one()) * self.re.powf(p - F::one() - F::one()),
        )
    }

    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let nf = F::from_i32(n).unwrap();
        self.chain2(
            self.re.powi(n),
            nf * self.re.powi(n - 1),
            nf * (nf - F::one()) * self.re.powi(n - 2),
        )
    }

    #[inline]
    pub fn recip(self) -> Self {
        self.powf(-F::one())
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        let four = two + two;
        self.chain2(s, F::one() / (two * s), -F::one() / (four * s * s * s))
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain2(e, e, e)
    }

    #[inline]
    pub fn ln(self) -> Self {
        let inv = F::one() / self.re;
        self.chain2(self.re.ln(), inv, -inv * inv)
    }

    // ── Trig ──

    #[inline]
    pub fn sin(self) -> Self {
        let (s, c) = self.re.sin_cos();
        self.chain2(s, c, -s)
    }

    #[inline]
    pub fn cos(self) -> Self {
        let (s, c) = self.re.sin_cos();
        self.chain2(c, -s, -c)
    }

    #[inline]
    pub fn tan(self) -> Self {
        let t = self.re.tan();
        let c = self.re.cos();
        let sec2 = F::one() / (c * c);
        let two = F::one() + F::one();
        self.chain2(t, sec2, two * t * sec2)
    }

    // ── Hyperbolic ──

    #[inline]
    pub fn sinh(self) -> Self {
        self.chain2(self.re.sinh(), self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.chain2(self.re.cosh(), self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.re.tanh();
        let c = self.re.cosh();
        let sech2 = F::one() / (c * c);
        let two = F::one() + F::one();
        self.chain2(t, sech2, -two * t * sech2)
    }

    // ── Misc ──

    /// Absolute value with the same branch convention as
    /// [`Dual::abs`](crate::Dual::abs): `re < 0` negates every component,
    /// `re ≥ 0` passes through unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        if self.re < F::zero() {
            HyperDual {
                re: -self.re,
                dx: -self.dx,
                dy: -self.dy,
                dxy: -self.dxy,
            }
        } else {
            self
        }
    }

    /// Floor; all derivative components are zero away from the steps.
    #[inline]
    pub fn floor(self) -> Self {
        HyperDual::constant(self.re.floor())
    }

    /// Ceiling; same zero-derivative convention as [`floor`](Self::floor).
    #[inline]
    pub fn ceil(self) -> Self {
        HyperDual::constant(self.re.ceil())
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.re >= other.re {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.re <= other.re {
            self
        } else {
            other
        }
    }
}
