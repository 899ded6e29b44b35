use std::fmt::{self, Display};

use crate::Float;

/// Dual number for first-order forward-mode differentiation.
///
/// `Dual { re, dx }` represents `re + dx·ε` where `ε² = 0`. Evaluating an
/// expression over duals propagates the exact first derivative with respect
/// to the seeded variable alongside the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<F: Float> {
    /// Value of the expression at the evaluation point.
    pub re: F,
    /// First derivative with respect to the traced variable.
    pub dx: F,
}

impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.dx)
    }
}

impl<F: Float> From<F> for Dual<F> {
    #[inline]
    fn from(re: F) -> Self {
        Dual::constant(re)
    }
}

impl<F: Float> Dual<F> {
    /// Create a dual number with an explicit derivative seed.
    #[inline]
    pub fn new(re: F, dx: F) -> Self {
        Dual { re, dx }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(re: F) -> Self {
        Dual { re, dx: F::zero() }
    }

    /// Create the variable being differentiated (unit derivative).
    #[inline]
    pub fn variable(re: F) -> Self {
        Dual { re, dx: F::one() }
    }

    /// Apply the chain rule: given `g(self.re)` and `g'(self.re)`, produce
    /// the dual result.
    #[inline]
    fn chain(self, g_val: F, g_deriv: F) -> Self {
        Dual {
            re: g_val,
            dx: self.dx * g_deriv,
        }
    }

    // ── Powers ──

    /// Raise to a plain real exponent: `d/da a^p = p·a^(p−1)`.
    #[inline]
    pub fn powf(self, p: F) -> Self {
        self.chain(self.re.powf(p), p * self.re.powf(p - F::one()))
    }

    /// `p`-th root, i.e. `a^(1/p)`.
    #[inline]
    pub fn root(self, p: F) -> Self {
        let r = self.re.powf(p.recip());
        self.chain(r, (p * r.powf(p - F::one())).recip())
    }

    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let deriv = F::from_i32(n).unwrap() * self.re.powi(n - 1);
        self.chain(self.re.powi(n), deriv)
    }

    #[inline]
    pub fn recip(self) -> Self {
        let inv = F::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    #[inline]
    pub fn cbrt(self) -> Self {
        let c = self.re.cbrt();
        let three = F::from_f64(3.0).unwrap();
        self.chain(c, F::one() / (three * c * c))
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn exp2(self) -> Self {
        let e = self.re.exp2();
        self.chain(e, e * F::LN_2())
    }

    #[inline]
    pub fn exp_m1(self) -> Self {
        self.chain(self.re.exp_m1(), self.re.exp())
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.re.ln(), F::one() / self.re)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.chain(self.re.log2(), F::one() / (self.re * F::LN_2()))
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.chain(self.re.log10(), F::one() / (self.re * F::LN_10()))
    }

    #[inline]
    pub fn ln_1p(self) -> Self {
        self.chain(self.re.ln_1p(), F::one() / (F::one() + self.re))
    }

    #[inline]
    pub fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    // ── Trig ──

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    /// Tangent. Singular where `cos(a) = 0`; the derivative overflows to
    /// ±inf there, matching plain float semantics.
    #[inline]
    pub fn tan(self) -> Self {
        let c = self.re.cos();
        self.chain(self.re.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.re.sin_cos();
        (
            Dual {
                re: s,
                dx: self.dx * c,
            },
            Dual {
                re: c,
                dx: self.dx * (-s),
            },
        )
    }

    #[inline]
    pub fn asin(self) -> Self {
        self.chain(
            self.re.asin(),
            F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn acos(self) -> Self {
        self.chain(
            self.re.acos(),
            -F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.chain(self.re.atan(), F::one() / (F::one() + self.re * self.re))
    }

    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        // d atan2(y,x) = (x·dy - y·dx) / (x² + y²)
        let denom = self.re * self.re + other.re * other.re;
        Dual {
            re: self.re.atan2(other.re),
            dx: (other.re * self.dx - self.re * other.dx) / denom,
        }
    }

    // ── Hyperbolic ──

    #[inline]
    pub fn sinh(self) -> Self {
        self.chain(self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.chain(self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let c = self.re.cosh();
        self.chain(self.re.tanh(), F::one() / (c * c))
    }

    #[inline]
    pub fn asinh(self) -> Self {
        self.chain(
            self.re.asinh(),
            F::one() / (self.re * self.re + F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn acosh(self) -> Self {
        self.chain(
            self.re.acosh(),
            F::one() / (self.re * self.re - F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn atanh(self) -> Self {
        self.chain(self.re.atanh(), F::one() / (F::one() - self.re * self.re))
    }

    // ── Misc ──

    /// Absolute value. The negative branch negates both components; `re ≥ 0`
    /// (zero included) passes through unchanged. Not differentiable at zero.
    #[inline]
    pub fn abs(self) -> Self {
        if self.re < F::zero() {
            Dual {
                re: -self.re,
                dx: -self.dx,
            }
        } else {
            self
        }
    }

    #[inline]
    pub fn signum(self) -> Self {
        Dual {
            re: self.re.signum(),
            dx: F::zero(),
        }
    }

    /// Floor. Piecewise constant, so the derivative is zero everywhere the
    /// function is differentiable; integer boundaries are not special-cased.
    #[inline]
    pub fn floor(self) -> Self {
        Dual {
            re: self.re.floor(),
            dx: F::zero(),
        }
    }

    /// Ceiling. Same zero-derivative convention as [`floor`](Self::floor).
    #[inline]
    pub fn ceil(self) -> Self {
        Dual {
            re: self.re.ceil(),
            dx: F::zero(),
        }
    }

    #[inline]
    pub fn round(self) -> Self {
        Dual {
            re: self.re.round(),
            dx: F::zero(),
        }
    }

    #[inline]
    pub fn trunc(self) -> Self {
        Dual {
            re: self.re.trunc(),
            dx: F::zero(),
        }
    }

    #[inline]
    pub fn fract(self) -> Self {
        Dual {
            re: self.re.fract(),
            dx: self.dx,
        }
    }

    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        // d(x·a + b) = a·dx + x·da + db
        Dual {
            re: self.re.mul_add(a.re, b.re),
            dx: self.dx * a.re + self.re * a.dx + b.dx,
        }
    }

    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        let h = self.re.hypot(other.re);
        Dual {
            re: h,
            dx: (self.re * self.dx + other.re * other.dx) / h,
        }
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
