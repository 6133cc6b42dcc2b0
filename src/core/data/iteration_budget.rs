const INCREASE_FACTOR: f64 = 1.2;
const DECREASE_FACTOR: f64 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationDirection {
    Increase,
    Decrease,
}

/// Maximum escape-time iterations per pixel.
///
/// Scaling is multiplicative and truncating, so an increase followed by a
/// decrease does not return to the starting value (430 -> 516 -> 412).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub const MIN: u32 = 5;

    /// Values below [`Self::MIN`] are raised to it.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn adjusted(self, direction: IterationDirection) -> Self {
        match direction {
            IterationDirection::Increase => Self::new(scale(self.0, INCREASE_FACTOR)),
            IterationDirection::Decrease => Self::new(scale(self.0, DECREASE_FACTOR)),
        }
    }
}

// float-to-int `as` truncates toward zero and saturates at u32::MAX
fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_floors_at_min() {
        assert_eq!(IterationBudget::new(0).get(), 5);
        assert_eq!(IterationBudget::new(4).get(), 5);
        assert_eq!(IterationBudget::new(430).get(), 430);
    }

    #[test]
    fn test_increase_truncates() {
        let budget = IterationBudget::new(430).adjusted(IterationDirection::Increase);
        assert_eq!(budget.get(), 516);

        let budget = IterationBudget::new(7).adjusted(IterationDirection::Increase);
        assert_eq!(budget.get(), 8);
    }

    #[test]
    fn test_increase_then_decrease_does_not_invert() {
        let start = IterationBudget::new(430);

        let up = start.adjusted(IterationDirection::Increase);
        let down = up.adjusted(IterationDirection::Decrease);

        assert_eq!(up.get(), 516);
        assert_eq!(down.get(), 412);
        assert_ne!(down, start);
    }

    #[test]
    fn test_decrease_never_drops_below_min() {
        assert_eq!(
            IterationBudget::new(5)
                .adjusted(IterationDirection::Decrease)
                .get(),
            5
        );
        assert_eq!(
            IterationBudget::new(6)
                .adjusted(IterationDirection::Decrease)
                .get(),
            5
        );

        let mut budget = IterationBudget::new(100_000);
        for _ in 0..200 {
            budget = budget.adjusted(IterationDirection::Decrease);
            assert!(budget.get() >= IterationBudget::MIN);
        }
        assert_eq!(budget.get(), 5);
    }

    #[test]
    fn test_increase_saturates() {
        let budget = IterationBudget::new(u32::MAX).adjusted(IterationDirection::Increase);

        assert_eq!(budget.get(), u32::MAX);
    }
}
