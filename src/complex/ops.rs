use super::Complex;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Operators produce new values; each one funnels into the in-place method of
// the same name so both surfaces round identically.
macro_rules! impl_self_math_op(
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident, $inplace:ident) => (
        impl $trt for Complex {
            type Output = Complex;

            fn $mth(mut self, other: Complex) -> Complex {
                self.$inplace(other);
                self
            }
        }

        impl $trt<&Complex> for Complex {
            type Output = Complex;

            fn $mth(mut self, other: &Complex) -> Complex {
                self.$inplace(*other);
                self
            }
        }

        impl $trt<Complex> for &Complex {
            type Output = Complex;

            fn $mth(self, other: Complex) -> Complex {
                *self.copy().$inplace(other)
            }
        }

        impl $trt<&Complex> for &Complex {
            type Output = Complex;

            fn $mth(self, other: &Complex) -> Complex {
                *self.copy().$inplace(*other)
            }
        }

        impl $trt<f64> for Complex {
            type Output = Complex;

            fn $mth(mut self, other: f64) -> Complex {
                self.$inplace(Complex::from_real(other));
                self
            }
        }

        impl $trt<f64> for &Complex {
            type Output = Complex;

            fn $mth(self, other: f64) -> Complex {
                *self.copy().$inplace(Complex::from_real(other))
            }
        }

        impl $assign_trt for Complex {
            fn $assign_mth(&mut self, other: Complex) {
                self.$inplace(other);
            }
        }

        impl $assign_trt<&Complex> for Complex {
            fn $assign_mth(&mut self, other: &Complex) {
                self.$inplace(*other);
            }
        }

        impl $assign_trt<f64> for Complex {
            fn $assign_mth(&mut self, other: f64) {
                self.$inplace(Complex::from_real(other));
            }
        }
    );
);

impl_self_math_op!(Add, add, AddAssign, add_assign, plus);
impl_self_math_op!(Sub, sub, SubAssign, sub_assign, minus);
impl_self_math_op!(Mul, mul, MulAssign, mul_assign, times);
impl_self_math_op!(Div, div, DivAssign, div_assign, divide);

impl Neg for Complex {
    type Output = Complex;

    fn neg(mut self) -> Complex {
        self.negate();
        self
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        *self.copy().negate()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}
