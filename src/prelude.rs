//! complexkit prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use complexkit::prelude::*;
//!
//! let mut z = Complex::new(2.0, 3.0);
//! z.power(2);
//! assert_eq!(z, Complex::new(-5.0, 12.0));
//! ```

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::mandelbrot::{escape_time, is_in_set, Viewport, ViewportBuilder};
