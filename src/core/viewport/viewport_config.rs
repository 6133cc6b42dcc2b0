use crate::core::data::{
    iteration_budget::IterationBudget, screen_size::ScreenSize, viewport_bounds::ViewportBounds,
};

pub const DEFAULT_SCREEN_WIDTH: u32 = 1000;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 430;

pub(crate) fn default_bounds() -> ViewportBounds {
    ViewportBounds::from_extents(-2.5, -2.0, 1.5, 2.0).expect("default viewport bounds are valid")
}

fn default_screen() -> ScreenSize {
    ScreenSize::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
        .expect("default screen size is valid")
}

/// Starting point of a session, and the target of a view reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub bounds: ViewportBounds,
    pub screen: ScreenSize,
    pub iterations: IterationBudget,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            bounds: default_bounds(),
            screen: default_screen(),
            iterations: IterationBudget::new(DEFAULT_MAX_ITERATIONS),
        }
    }
}
