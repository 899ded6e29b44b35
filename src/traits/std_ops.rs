use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::dual::Dual;
use crate::float::Float;
use crate::hyperdual::HyperDual;

// ──────────────────────────────────────────────
//  Dual<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Add for Dual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            dx: self.dx + rhs.dx,
        }
    }
}

impl<F: Float> Sub for Dual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            dx: self.dx - rhs.dx,
        }
    }
}

impl<F: Float> Mul for Dual<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            dx: self.dx * rhs.re + self.re * rhs.dx,
        }
    }
}

impl<F: Float> Div for Dual<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        // Quotient rule; a zero denominator produces inf/NaN, never an error.
        let inv = F::one() / rhs.re;
        Dual {
            re: self.re * inv,
            dx: (self.dx * rhs.re - self.re * rhs.dx) * inv * inv,
        }
    }
}

impl<F: Float> Neg for Dual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            dx: -self.dx,
        }
    }
}

impl<F: Float> Rem for Dual<F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Dual {
            re: self.re % rhs.re,
            dx: self.dx,
        }
    }
}

impl<F: Float> AddAssign for Dual<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Dual<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for Dual<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> DivAssign for Dual<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float> RemAssign for Dual<F> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Mixed ops: Dual<F> with primitive floats, in both orders, so plain
// scalars participate in expressions as constants. Generated for f32/f64.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re + rhs,
                    dx: self.dx,
                }
            }
        }

        impl Add<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self + rhs.re,
                    dx: rhs.dx,
                }
            }
        }

        impl Sub<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re - rhs,
                    dx: self.dx,
                }
            }
        }

        impl Sub<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self - rhs.re,
                    dx: -rhs.dx,
                }
            }
        }

        impl Mul<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re * rhs,
                    dx: self.dx * rhs,
                }
            }
        }

        impl Mul<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self * rhs.re,
                    dx: self * rhs.dx,
                }
            }
        }

        impl Div<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f> {
                let inv = 1.0 / rhs;
                Dual {
                    re: self.re * inv,
                    dx: self.dx * inv,
                }
            }
        }

        impl Div<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: Dual<$f>) -> Dual<$f> {
                let inv = 1.0 / rhs.re;
                Dual {
                    re: self * inv,
                    dx: -self * rhs.dx * inv * inv,
                }
            }
        }

        impl Rem<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn rem(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re % rhs,
                    dx: self.dx,
                }
            }
        }

        impl Rem<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn rem(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self % rhs.re,
                    dx: 0.0,
                }
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

// Comparisons look at the value only; two duals with equal values but
// different derivatives compare equal.
impl<F: Float> PartialEq for Dual<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re
    }
}

impl<F: Float> PartialOrd for Dual<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

// ──────────────────────────────────────────────
//  HyperDual<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Add for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        HyperDual {
            re: self.re + rhs.re,
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
            dxy: self.dxy + rhs.dxy,
        }
    }
}

impl<F: Float> Sub for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        HyperDual {
            re: self.re - rhs.re,
            dx: self.dx - rhs.dx,
            dy: self.dy - rhs.dy,
            dxy: self.dxy - rhs.dxy,
        }
    }
}

impl<F: Float> Mul for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // Second-order product rule. The cross component needs all four
        // terms; dropping any one silently corrupts mixed partials.
        HyperDual {
            re: self.re * rhs.re,
            dx: self.re * rhs.dx + self.dx * rhs.re,
            dy: self.re * rhs.dy + self.dy * rhs.re,
            dxy: self.re * rhs.dxy
                + self.dx * rhs.dy
                + self.dy * rhs.dx
                + self.dxy * rhs.re,
        }
    }
}

impl<F: Float> Div for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        // Derived from multiply and power so the quotient curvature stays
        // consistent with both by construction.
        self * rhs.powf(-F::one())
    }
}

impl<F: Float> Neg for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        HyperDual {
            re: -self.re,
            dx: -self.dx,
            dy: -self.dy,
            dxy: -self.dxy,
        }
    }
}

impl<F: Float> Rem for HyperDual<F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        HyperDual {
            re: self.re % rhs.re,
            ..self
        }
    }
}

impl<F: Float> AddAssign for HyperDual<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for HyperDual<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for HyperDual<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> DivAssign for HyperDual<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float> RemAssign for HyperDual<F> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Mixed ops: HyperDual<F> with primitive floats.
macro_rules! impl_hyperdual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for HyperDual<$f> {
            type Output = HyperDual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> HyperDual<$f> {
                HyperDual {
                    re: self.re + rhs,
                    ..self
                }
            }
        }

        impl Add<HyperDual<$f>> for $f {
            type Output = HyperDual<$f>;
            #[inline]
            fn add(self, rhs: HyperDual<$f>) -> HyperDual<$f> {
                HyperDual {
                    re: self + rhs.re,
                    ..rhs
                }
            }
        }

        impl Sub<$f> for HyperDual<$f> {
            type Output = HyperDual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> HyperDual<$f> {
                HyperDual {
                    re: self.re - rhs,
                    ..self
                }
            }
        }

        impl Sub<HyperDual<$f>> for $f {
            type Output = HyperDual<$f>;
            #[inline]
            fn sub(self, rhs: HyperDual<$f>) -> HyperDual<$f> {
                HyperDual {
                    re: self - rhs.re,
                    dx: -rhs.dx,
                    dy: -rhs.dy,
                    dxy: -rhs.dxy,
                }
            }
        }

        impl Mul<$f> for HyperDual<$f> {
            type Output = HyperDual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> HyperDual<$f> {
                HyperDual {
                    re: self.re * rhs,
                    dx: self.dx * rhs,
                    dy: self.dy * rhs,
                    dxy: self.dxy * rhs,
                }
            }
        }

        impl Mul<HyperDual<$f>> for $f {
            type Output = HyperDual<$f>;
            #[inline]
            fn mul(self, rhs: HyperDual<$f>) -> HyperDual<$f> {
                rhs * self
            }
        }

        impl Div<$f> for HyperDual<$f> {
            type Output = HyperDual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> HyperDual<$f> {
                self * (1.0 / rhs)
            }
        }

        impl Div<HyperDual<$f>> for $f {
            type Output = HyperDual<$f>;
            #[inline]
            fn div(self, rhs: HyperDual<$f>) -> HyperDual<$f> {
                rhs.powf(-1.0) * self
            }
        }

        impl Rem<$f> for HyperDual<$f> {
            type Output = HyperDual<$f>;
            #[inline]
            fn rem(self, rhs: $f) -> HyperDual<$f> {
                HyperDual {
                    re: self.re % rhs,
                    ..self
                }
            }
        }

        impl Rem<HyperDual<$f>> for $f {
            type Output = HyperDual<$f>;
            #[inline]
            fn rem(self, rhs: HyperDual<$f>) -> HyperDual<$f> {
                HyperDual::constant(self % rhs.re)
            }
        }
    };
}

impl_hyperdual_scalar_ops!(f32);
impl_hyperdual_scalar_ops!(f64);

impl<F: Float> PartialEq for HyperDual<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re
    }
}

impl<F: Float> PartialOrd for HyperDual<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.re.partial_cmp(&other.re)
    }
}
