use crate::complex::Complex;
use log::trace;
use simple_error::{bail, SimpleError};

/// Squared radius beyond which an orbit is known to diverge.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Iterate `z ← z² + c` from `z = 0` and report the iteration at which the
/// orbit leaves the escape radius, or `None` if it stays bounded for
/// `max_iterations` steps.
pub fn escape_time(c: Complex, max_iterations: u32) -> Option<u32> {
    let mut z = Complex::ZERO;
    for n in 1..=max_iterations {
        let square = z;
        z.times(square).plus(c);
        if z.length_sq() > ESCAPE_RADIUS_SQ {
            trace!("{} escaped after {} iterations", c, n);
            return Some(n);
        }
    }
    None
}

/// True if `c` has not escaped after `max_iterations`.
pub fn is_in_set(c: Complex, max_iterations: u32) -> bool {
    escape_time(c, max_iterations).is_none()
}

/// A rectangle of the complex plane sampled on a pixel grid.
///
/// Pixel `(0, 0)` is the top-left corner (smallest real part, largest
/// imaginary part); pixel `(width - 1, height - 1)` is the bottom-right one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
    width: usize,
    height: usize,
}

impl Viewport {
    /// Bottom-left corner of the rectangle
    pub fn min(&self) -> Complex {
        self.min
    }

    /// Top-right corner of the rectangle
    pub fn max(&self) -> Complex {
        self.max
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Complex coordinate of pixel `(x, y)`.
    pub fn point(&self, x: usize, y: usize) -> Complex {
        let fx = x as f64 / (self.width - 1) as f64;
        let fy = y as f64 / (self.height - 1) as f64;
        Complex::new(
            self.min.re() + (self.max.re() - self.min.re()) * fx,
            self.max.im() - (self.max.im() - self.min.im()) * fy,
        )
    }

    /// Escape time of the point under pixel `(x, y)`.
    pub fn escape_time_at(&self, x: usize, y: usize, max_iterations: u32) -> Option<u32> {
        escape_time(self.point(x, y), max_iterations)
    }
}

/// Builder for a validated [`Viewport`].
pub struct ViewportBuilder {
    min: Complex,
    max: Complex,
    width: usize,
    height: usize,
}

impl ViewportBuilder {
    /// Start from the default view of the whole set on an 80x40 grid.
    pub fn new() -> Self {
        ViewportBuilder::default()
    }

    /// Bottom-left corner of the rectangle.
    pub fn min(mut self, min: Complex) -> Self {
        self.min = min;
        self
    }

    /// Top-right corner of the rectangle.
    pub fn max(mut self, max: Complex) -> Self {
        self.max = max;
        self
    }

    /// Center the rectangle on `center` with the given real and imaginary spans.
    pub fn centered(mut self, center: Complex, re_span: f64, im_span: f64) -> Self {
        let half = Complex::new(re_span / 2.0, im_span / 2.0);
        self.min = center - half;
        self.max = center + half;
        self
    }

    /// Number of pixel columns (at least 2).
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Number of pixel rows (at least 2).
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Validate the grid and rectangle and produce the [`Viewport`].
    pub fn build(self) -> Result<Viewport, SimpleError> {
        if self.width < 2 || self.height < 2 {
            bail!(
                "viewport grid must be at least 2x2 pixels, got {}x{}",
                self.width,
                self.height
            );
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            bail!("viewport corners must be finite, got {} and {}", self.min, self.max);
        }
        if self.min.re() >= self.max.re() || self.min.im() >= self.max.im() {
            bail!(
                "viewport is empty or inverted: min {} is not below and left of max {}",
                self.min,
                self.max
            );
        }
        Ok(Viewport {
            min: self.min,
            max: self.max,
            width: self.width,
            height: self.height,
        })
    }
}

impl Default for ViewportBuilder {
    fn default() -> Self {
        Self {
            min: Complex::new(-2.5, -1.25),
            max: Complex::new(1.0, 1.25),
            width: 80,
            height: 40,
        }
    }
}
