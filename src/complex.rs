use crate::error::ComplexError;
use float_cmp::{ApproxEq, F64Margin};
use log::debug;
use std::fmt;

pub mod ops;
pub mod parse;

/// A complex number `re + im·i` backed by two `f64` parts.
///
/// The arithmetic and transcendental methods replace the receiver with the
/// result and hand back `&mut Self`, so calls chain:
///
/// ```
/// use complexkit::complex::Complex;
///
/// let z = Complex::new(2.0, 3.0);
/// let w = *z.copy().exp().log();
/// assert!((w.re() - 2.0).abs() < 1e-12);
/// assert!((w.im() - 3.0).abs() < 1e-12);
/// ```
///
/// Singular inputs (division by zero, log of zero) follow IEEE-754 and
/// produce infinities or NaN. The `checked_*` variants reject them instead.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// A constant `Complex` 0.
    pub const ZERO: Self = Complex::new(0.0, 0.0);

    /// A constant `Complex` 1.
    pub const ONE: Self = Complex::new(1.0, 0.0);

    /// A constant `Complex` _i_, the imaginary unit.
    pub const I: Self = Complex::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex::new(0.0, im)
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(mag: f64, ang: f64) -> Self {
        let (sin, cos) = ang.sin_cos();
        Complex::new(mag * cos, mag * sin)
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Return an independent copy of this value.
    pub fn copy(&self) -> Complex {
        *self
    }

    /// Add `other` in place.
    pub fn plus(&mut self, other: Complex) -> &mut Self {
        self.re += other.re;
        self.im += other.im;
        self
    }

    /// Subtract `other` in place.
    pub fn minus(&mut self, other: Complex) -> &mut Self {
        self.re -= other.re;
        self.im -= other.im;
        self
    }

    /// Multiply by `other` in place.
    pub fn times(&mut self, other: Complex) -> &mut Self {
        let re = self.re * other.re - self.im * other.im;
        let im = self.re * other.im + self.im * other.re;
        self.re = re;
        self.im = im;
        self
    }

    /// Divide by `other` in place.
    ///
    /// Dividing by zero is not trapped: both parts come out NaN (or ±inf
    /// when only the divisor's squared magnitude underflows), exactly as the
    /// underlying `f64` division does. Use [`Complex::checked_divide`] to
    /// reject a zero divisor.
    pub fn divide(&mut self, other: Complex) -> &mut Self {
        let d = other.length_sq();
        let re = (self.re * other.re + self.im * other.im) / d;
        let im = (self.im * other.re - self.re * other.im) / d;
        self.re = re;
        self.im = im;
        self
    }

    /// Divide by `other` in place, failing on a zero divisor or a
    /// non-finite quotient.
    ///
    /// The quotient is scaled (Smith's method) so a tiny or huge divisor
    /// does not overflow or underflow `|other|²`. On error the receiver is
    /// left untouched.
    pub fn checked_divide(&mut self, other: Complex) -> Result<&mut Self, ComplexError> {
        if other == Complex::ZERO {
            debug!("rejecting division of {} by zero", self);
            return Err(ComplexError::DivisionByZero);
        }
        let quotient = scaled_quotient(*self, other);
        if !quotient.is_finite() {
            debug!("rejecting {} / {}: quotient {} is not finite", self, other, quotient);
            return Err(ComplexError::NonFiniteResult);
        }
        *self = quotient;
        Ok(self)
    }

    /// Raise to the non-negative integer power `n` by repeated multiplication.
    ///
    /// `n = 0` yields `1 + 0i` for every base, `0 + 0i` included.
    pub fn power(&mut self, n: u32) -> &mut Self {
        let base = *self;
        *self = Complex::ONE;
        for _ in 0..n {
            self.times(base);
        }
        self
    }

    /// Raise to the integer power `n`; a negative power inverts the base
    /// first, then raises it to `|n|`.
    ///
    /// A zero base with a negative power is not trapped and yields NaN.
    pub fn powi(&mut self, n: i32) -> &mut Self {
        if n < 0 {
            self.reciprocal();
        }
        self.power(n.unsigned_abs())
    }

    /// Raise to the integer power `n`, failing for a zero base with a
    /// negative power or when the result is not finite. On error the
    /// receiver is left untouched.
    pub fn checked_powi(&mut self, n: i32) -> Result<&mut Self, ComplexError> {
        if n < 0 && *self == Complex::ZERO {
            debug!("rejecting {}^{}: zero base for a negative power", self, n);
            return Err(ComplexError::DivisionByZero);
        }
        let result = *self.copy().powi(n);
        if !result.is_finite() {
            debug!("rejecting {}^{}: result {} is not finite", self, n, result);
            return Err(ComplexError::NonFiniteResult);
        }
        *self = result;
        Ok(self)
    }

    /// Replace with `1 / self`, scaled so large or tiny magnitudes do not
    /// overflow `|self|²`. `1 / 0` is NaN.
    pub fn reciprocal(&mut self) -> &mut Self {
        *self = scaled_quotient(Complex::ONE, *self);
        self
    }

    /// Replace with the complex exponential `e^self`.
    pub fn exp(&mut self) -> &mut Self {
        let scale = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        self.re = scale * cos;
        self.im = scale * sin;
        self
    }

    /// Replace with the principal natural logarithm.
    ///
    /// The imaginary part lies in (−π, π]. `log(0)` is `-inf + 0i`; use
    /// [`Complex::checked_log`] to reject it.
    pub fn log(&mut self) -> &mut Self {
        let re = self.abs().ln();
        let im = self.arg();
        self.re = re;
        self.im = im;
        self
    }

    /// Replace with the principal natural logarithm, failing for zero.
    /// On error the receiver is left untouched.
    pub fn checked_log(&mut self) -> Result<&mut Self, ComplexError> {
        if self.abs() == 0.0 {
            debug!("rejecting logarithm of {}", self);
            return Err(ComplexError::LogOfZero);
        }
        Ok(self.log())
    }

    /// Replace with the complex sine.
    pub fn sin(&mut self) -> &mut Self {
        let re = self.re.sin() * self.im.cosh();
        let im = self.re.cos() * self.im.sinh();
        self.re = re;
        self.im = im;
        self
    }

    /// Replace with the complex cosine.
    pub fn cos(&mut self) -> &mut Self {
        let re = self.re.cos() * self.im.cosh();
        let im = -self.re.sin() * self.im.sinh();
        self.re = re;
        self.im = im;
        self
    }

    /// Replace with the complex conjugate.
    pub fn conj(&mut self) -> &mut Self {
        self.im = -self.im;
        self
    }

    /// Replace with the additive inverse.
    pub fn negate(&mut self) -> &mut Self {
        self.re = -self.re;
        self.im = -self.im;
        self
    }

    /// Get the magnitude (absolute value) of the complex number
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Calculate the square of the magnitude, skipping the square root
    pub fn length_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Get the argument (phase angle) of the complex number
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Magnitude and angle in radians
    pub fn to_polar(&self) -> (f64, f64) {
        (self.abs(), self.arg())
    }

    /// Check if either part is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if either part is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if both parts are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

// Smith's algorithm: divide through by the larger part of the divisor so
// no intermediate squares the divisor.
fn scaled_quotient(num: Complex, den: Complex) -> Complex {
    if den.re.abs() >= den.im.abs() {
        let r = den.im / den.re;
        let d = den.re + den.im * r;
        Complex::new((num.re + num.im * r) / d, (num.im - num.re * r) / d)
    } else {
        let r = den.re / den.im;
        let d = den.re * r + den.im;
        Complex::new((num.re * r + num.im) / d, (num.im * r - num.re) / d)
    }
}

impl ApproxEq for Complex {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.re.approx_eq(other.re, margin) && self.im.approx_eq(other.im, margin)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re, self.im);

        if im == 0.0 {
            write!(f, "{}", re)
        } else if re == 0.0 {
            if im == 1.0 {
                write!(f, "i")
            } else if im == -1.0 {
                write!(f, "-i")
            } else {
                write!(f, "{}i", im)
            }
        } else if im == 1.0 {
            write!(f, "{} + i", re)
        } else if im == -1.0 {
            write!(f, "{} - i", re)
        } else if im.is_sign_negative() {
            write!(f, "{} - {}i", re, -im)
        } else {
            write!(f, "{} + {}i", re, im)
        }
    }
}

#[cfg(test)]
mod complex_tests {

    use super::*;
    use float_cmp::{approx_eq, FloatMargin};
    use std::f64::consts::{E, FRAC_PI_2, PI};

    const DELTA: f64 = 0.0001;

    fn assert_close(actual: Complex, re: f64, im: f64) {
        assert!(
            approx_eq!(f64, actual.re(), re, epsilon = DELTA),
            "real part: expected {}, got {}",
            re,
            actual.re()
        );
        assert!(
            approx_eq!(f64, actual.im(), im, epsilon = DELTA),
            "imaginary part: expected {}, got {}",
            im,
            actual.im()
        );
    }

    #[test]
    fn test_creation() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.re(), 3.0);
        assert_eq!(z.im(), 4.0);

        assert_eq!(Complex::from_real(5.0), Complex::new(5.0, 0.0));
        assert_eq!(Complex::from_imag(2.0), Complex::new(0.0, 2.0));
        assert_eq!(Complex::default(), Complex::ZERO);

        assert_close(Complex::from_polar(1.0, FRAC_PI_2), 0.0, 1.0);
        assert_close(Complex::from_polar(2.0, PI), -2.0, 0.0);
    }

    #[test]
    fn test_plus() {
        let mut a = Complex::new(3.0, 4.0);
        a.plus(Complex::new(1.0, 2.0));
        assert_close(a, 4.0, 6.0);
    }

    #[test]
    fn test_minus() {
        let mut a = Complex::new(5.0, 7.0);
        a.minus(Complex::new(2.0, 3.0));
        assert_close(a, 3.0, 4.0);
    }

    #[test]
    fn test_times() {
        let mut a = Complex::new(2.0, 3.0);
        a.times(Complex::new(4.0, 5.0));
        assert_close(a, -7.0, 22.0);
    }

    #[test]
    fn test_divide() {
        let mut a = Complex::new(3.0, 2.0);
        a.divide(Complex::new(1.0, 1.0));
        assert_close(a, 2.5, -0.5);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let mut a = Complex::new(1.0, 0.0);
        a.divide(Complex::ZERO);
        assert!(a.re().is_nan());
        assert!(a.im().is_nan());

        let mut b = Complex::new(1.0, 0.0);
        b.divide(Complex::from_real(1e-200));
        assert_eq!(b.re(), f64::INFINITY);
    }

    #[test]
    fn test_checked_divide() {
        let mut a = Complex::new(3.0, 2.0);
        assert_eq!(
            a.checked_divide(Complex::ZERO).err(),
            Some(ComplexError::DivisionByZero)
        );
        assert_eq!(a, Complex::new(3.0, 2.0));

        let result = *a.checked_divide(Complex::new(1.0, 1.0)).unwrap();
        assert_close(result, 2.5, -0.5);
    }

    #[test]
    fn test_chaining_returns_receiver() {
        let mut a = Complex::new(1.0, 1.0);
        a.plus(Complex::ONE).times(Complex::I).minus(Complex::new(0.0, 2.0));
        assert_close(a, -1.0, 0.0);
    }

    #[test]
    fn test_power() {
        let mut a = Complex::new(2.0, 3.0);
        a.power(2);
        assert_eq!(a, Complex::new(-5.0, 12.0));

        let mut b = Complex::new(2.0, 3.0);
        b.power(0);
        assert_eq!(b, Complex::ONE);

        let mut zero = Complex::ZERO;
        zero.power(0);
        assert_eq!(zero, Complex::ONE);

        let mut i = Complex::I;
        i.power(4);
        assert_close(i, 1.0, 0.0);
    }

    #[test]
    fn test_powi_negative() {
        let mut a = Complex::new(0.0, 2.0);
        a.powi(-1);
        assert_close(a, 0.0, -0.5);

        let mut b = Complex::new(2.0, 3.0);
        b.powi(-2);
        let mut expected = Complex::ONE;
        expected.divide(Complex::new(-5.0, 12.0));
        assert_close(b, expected.re(), expected.im());

        let mut zero = Complex::ZERO;
        zero.powi(-1);
        assert!(!zero.is_finite());
    }

    #[test]
    fn test_checked_powi() {
        let mut zero = Complex::ZERO;
        assert_eq!(
            zero.checked_powi(-3).err(),
            Some(ComplexError::DivisionByZero)
        );
        assert_eq!(zero, Complex::ZERO);

        assert_eq!(*zero.checked_powi(0).unwrap(), Complex::ONE);

        let mut a = Complex::new(1.0, 1.0);
        assert_close(*a.checked_powi(-2).unwrap(), 0.0, -0.5);
    }

    #[test]
    fn test_negative_power_of_huge_base_underflows_to_zero() {
        let mut huge = Complex::new(1e300, 0.0);
        huge.powi(-2);
        assert!(huge.is_finite());
        assert_eq!(huge, Complex::ZERO);

        let mut checked = Complex::new(1e300, 0.0);
        assert_eq!(*checked.checked_powi(-2).unwrap(), Complex::ZERO);
    }

    #[test]
    fn test_checked_powi_never_yields_non_finite() {
        let mut overflow = Complex::new(1e300, 1e300);
        assert_eq!(
            overflow.checked_powi(2).err(),
            Some(ComplexError::NonFiniteResult)
        );
        assert_eq!(overflow, Complex::new(1e300, 1e300));

        for (base, n) in [
            (Complex::new(1e300, 0.0), -2),
            (Complex::new(1e-300, 1e-300), -3),
            (Complex::new(0.5, -2.0), 40),
            (Complex::new(f64::NAN, 0.0), 1),
            (Complex::new(1e-200, 0.0), -1),
        ] {
            let mut z = base;
            if let Ok(result) = z.checked_powi(n) {
                assert!(result.is_finite(), "{}^{} gave {}", base, n, result);
            }
        }
    }

    #[test]
    fn test_reciprocal_scales() {
        let mut big = Complex::new(1e200, 0.0);
        big.reciprocal();
        assert!(approx_eq!(f64, big.re(), 1e-200, ulps = 4));
        assert_eq!(big.im(), 0.0);

        let mut tiny = Complex::new(0.0, 1e-170);
        tiny.reciprocal();
        assert!(approx_eq!(f64, tiny.im(), -1e170, ulps = 4));
        assert_eq!(tiny.re(), 0.0);

        let mut z = Complex::new(3.0, 4.0);
        z.reciprocal();
        assert_close(z, 0.12, -0.16);

        let mut zero = Complex::ZERO;
        zero.reciprocal();
        assert!(zero.is_nan());
    }

    #[test]
    fn test_checked_divide_by_tiny_divisor() {
        let mut one = Complex::ONE;
        let quotient = *one.checked_divide(Complex::from_real(1e-170)).unwrap();
        assert!(approx_eq!(f64, quotient.re(), 1e170, ulps = 4));
        assert_eq!(quotient.im(), 0.0);

        let mut huge = Complex::new(1e300, 0.0);
        assert_eq!(
            huge.checked_divide(Complex::from_real(1e-300)).err(),
            Some(ComplexError::NonFiniteResult)
        );
        assert_eq!(huge, Complex::new(1e300, 0.0));
    }

    #[test]
    fn test_exp() {
        let mut zero = Complex::ZERO;
        zero.exp();
        assert_close(zero, 1.0, 0.0);

        let mut one = Complex::ONE;
        one.exp();
        assert_close(one, E, 0.0);

        let mut ipi = Complex::new(0.0, PI);
        ipi.exp();
        assert_close(ipi, -1.0, 0.0);
    }

    #[test]
    fn test_log() {
        let mut one = Complex::ONE;
        one.log();
        assert_close(one, 0.0, 0.0);

        let mut minus_one = Complex::new(-1.0, 0.0);
        minus_one.log();
        assert_close(minus_one, 0.0, PI);

        let mut i = Complex::I;
        i.log();
        assert_close(i, 0.0, FRAC_PI_2);
    }

    #[test]
    fn test_log_of_zero() {
        let mut zero = Complex::ZERO;
        zero.log();
        assert_eq!(zero.re(), f64::NEG_INFINITY);
        assert_eq!(zero.im(), 0.0);

        let mut checked = Complex::ZERO;
        assert_eq!(checked.checked_log().err(), Some(ComplexError::LogOfZero));
        assert_eq!(checked, Complex::ZERO);
    }

    #[test]
    fn test_exp_log_identity() {
        let z = Complex::new(2.0, 3.0);
        let ln_exp_z = *z.copy().exp().log();
        assert_close(ln_exp_z, z.re(), z.im());
    }

    #[test]
    fn test_sin_cos() {
        let mut s = Complex::ZERO;
        s.sin();
        assert_close(s, 0.0, 0.0);

        let mut c = Complex::ZERO;
        c.cos();
        assert_close(c, 1.0, 0.0);

        // sin²z + cos²z = 1
        let z = Complex::new(0.7, -1.3);
        let mut sin_sq = *z.copy().sin();
        sin_sq.power(2);
        let mut cos_sq = *z.copy().cos();
        cos_sq.power(2);
        sin_sq.plus(cos_sq);
        assert_close(sin_sq, 1.0, 0.0);
    }

    #[test]
    fn test_abs_and_length_sq() {
        let z = Complex::new(3.0, 4.0);
        assert!(approx_eq!(f64, z.abs(), 5.0, epsilon = DELTA));
        assert!(approx_eq!(f64, z.length_sq(), 25.0, epsilon = DELTA));
        assert_eq!(z, Complex::new(3.0, 4.0));
    }

    #[test]
    fn test_arg_and_polar() {
        let z = Complex::new(0.0, -2.0);
        let (mag, ang) = z.to_polar();
        assert!(approx_eq!(f64, mag, 2.0, epsilon = DELTA));
        assert!(approx_eq!(f64, ang, -FRAC_PI_2, epsilon = DELTA));

        let back = Complex::from_polar(mag, ang);
        assert_close(back, 0.0, -2.0);
    }

    #[test]
    fn test_conj_and_negate() {
        let mut z = Complex::new(3.0, 4.0);
        z.conj();
        assert_eq!(z, Complex::new(3.0, -4.0));
        z.negate();
        assert_eq!(z, Complex::new(-3.0, 4.0));
    }

    #[test]
    fn test_conjugate_multiplication() {
        let a = Complex::new(3.0, 4.0);
        let product = *a.copy().times(Complex::new(3.0, -4.0));
        assert_close(product, 25.0, 0.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Complex::new(2.0, 3.0);
        let mut copy = original.copy();
        assert_eq!(copy, original);

        copy.plus(Complex::ONE);
        assert_eq!(original, Complex::new(2.0, 3.0));
        assert_eq!(copy, Complex::new(3.0, 3.0));
    }

    #[test]
    fn test_classification() {
        assert!(Complex::new(1.0, 2.0).is_finite());
        assert!(Complex::new(f64::NAN, 0.0).is_nan());
        assert!(Complex::new(0.0, f64::INFINITY).is_infinite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_approx_eq_margin() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(1.0 + 1e-9, 2.0 - 1e-9);
        assert!(a.approx_eq(b, F64Margin::default().epsilon(1e-8)));
        assert!(!a.approx_eq(b, F64Margin::zero()));
        assert!(approx_eq!(Complex, a, b, epsilon = 1e-8));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Complex::new(3.0, 4.0)), "3 + 4i");
        assert_eq!(format!("{}", Complex::new(3.0, -4.0)), "3 - 4i");
        assert_eq!(format!("{}", Complex::from_real(5.0)), "5");
        assert_eq!(format!("{}", Complex::from_imag(2.0)), "2i");
        assert_eq!(format!("{}", Complex::I), "i");
        assert_eq!(format!("{}", Complex::new(0.0, -1.0)), "-i");
        assert_eq!(format!("{}", Complex::new(2.5, 1.0)), "2.5 + i");
        assert_eq!(format!("{}", Complex::new(2.5, -1.0)), "2.5 - i");
    }
}
