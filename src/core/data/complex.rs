// a point on the complex plane; the viewer only maps to and from it, it never iterates
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_both_parts() {
        let c = Complex::new(-2.5, 1.5);

        assert_eq!(c.real, -2.5);
        assert_eq!(c.imag, 1.5);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(0.0, 0.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
