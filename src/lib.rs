pub mod complex;
pub mod error;
pub mod mandelbrot;
pub mod prelude;

/// Create a **[`Complex`](complex::Complex)** from a real part and an
/// optional imaginary part.
///
/// ```
/// use complexkit::complex;
/// let z = complex!(3.0, 4.0);
/// let r = complex!(2.5);
///
/// assert_eq!(z.length_sq(), 25.0);
/// assert_eq!(r.im(), 0.0);
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::complex::Complex::from_real($re)
    };
    ($re:expr, $im:expr) => {
        $crate::complex::Complex::new($re, $im)
    };
}
