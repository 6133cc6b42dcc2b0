use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportBoundsError {
    InvalidExtent { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for ViewportBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(
                    f,
                    "viewport extent must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite => write!(f, "viewport bounds must be finite"),
        }
    }
}

impl Error for ViewportBoundsError {}

/// The rectangle of the complex plane mapped onto the window.
///
/// `lower_left` holds (minX, minY) and `upper_right` holds (maxX, maxY). The
/// plane's Y axis grows upward, so `lower_left` is drawn at the bottom-left
/// corner of the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportBounds {
    lower_left: Complex,
    upper_right: Complex,
}

impl ViewportBounds {
    pub fn new(lower_left: Complex, upper_right: Complex) -> Result<Self, ViewportBoundsError> {
        if !lower_left.is_finite() || !upper_right.is_finite() {
            return Err(ViewportBoundsError::NonFinite);
        }

        let width = upper_right.real - lower_left.real;
        let height = upper_right.imag - lower_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportBoundsError::InvalidExtent { width, height });
        }

        Ok(Self {
            lower_left,
            upper_right,
        })
    }

    pub fn from_extents(
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Self, ViewportBoundsError> {
        Self::new(Complex::new(min_x, min_y), Complex::new(max_x, max_y))
    }

    #[must_use]
    pub fn lower_left(&self) -> Complex {
        self.lower_left
    }

    #[must_use]
    pub fn upper_right(&self) -> Complex {
        self.upper_right
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.lower_left.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.lower_left.imag
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.upper_right.real
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.upper_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_right.real - self.lower_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_right.imag - self.lower_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.lower_left.real + self.upper_right.real) / 2.0,
            (self.lower_left.imag + self.upper_right.imag) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.lower_left.real <= point.real
            && self.lower_left.imag <= point.imag
            && self.upper_right.real >= point.real
            && self.upper_right.imag >= point.imag
    }

    /// Same rectangle shifted by `(dx, dy)` in plane units.
    pub fn translated(&self, dx: f64, dy: f64) -> Result<Self, ViewportBoundsError> {
        Self::from_extents(
            self.min_x() + dx,
            self.min_y() + dy,
            self.max_x() + dx,
            self.max_y() + dy,
        )
    }

    pub fn with_max_y(&self, max_y: f64) -> Result<Self, ViewportBoundsError> {
        Self::from_extents(self.min_x(), self.min_y(), self.max_x(), max_y)
    }
}
