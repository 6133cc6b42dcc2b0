use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ScreenSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "screen size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ScreenSizeError {}

/// Drawable area of the window in physical pixels. Never zero on either axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height over width, the factor applied to the plane's X extent on resize.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
