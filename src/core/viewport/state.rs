use crate::core::data::{
    iteration_budget::{IterationBudget, IterationDirection},
    screen_size::ScreenSize,
    viewport_bounds::ViewportBounds,
};
use crate::core::viewport::viewport_config::ViewportConfig;

// A scroll of 10 lines collapses the rectangle onto the cursor point.
const ZOOM_DIVISOR: f64 = 10.0;

/// Viewing rectangle, window size and iteration budget of one viewer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    bounds: ViewportBounds,
    screen: ScreenSize,
    iterations: IterationBudget,
}

impl ViewportState {
    /// Builds the state and fits the bounds' Y extent to the screen aspect.
    #[must_use]
    pub fn new(config: &ViewportConfig) -> Self {
        let mut state = Self {
            bounds: config.bounds,
            screen: config.screen,
            iterations: config.iterations,
        };
        state.fit_to_screen();
        state
    }

    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn iterations(&self) -> IterationBudget {
        self.iterations
    }

    /// Records the new window size and recomputes `max_y` so the plane keeps
    /// the window's aspect ratio. `min_x`, `max_x` and `min_y` are untouched.
    ///
    /// Returns `false` without changing anything when either side is zero,
    /// which is what a minimised window reports.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let Ok(screen) = ScreenSize::new(width, height) else {
            log::debug!("ignoring degenerate resize to {}x{}", width, height);
            return false;
        };

        self.screen = screen;
        self.fit_to_screen();
        true
    }

    /// Translates the view by a cursor movement of `(dx, dy)` pixels so the
    /// plane follows the pointer. Screen Y grows downward, plane Y upward.
    pub fn pan(&mut self, dx_pixels: f64, dy_pixels: f64) -> bool {
        if dx_pixels == 0.0 && dy_pixels == 0.0 {
            return false;
        }

        let x_delta = -dx_pixels / f64::from(self.screen.width()) * self.bounds.width();
        let y_delta = dy_pixels / f64::from(self.screen.height()) * self.bounds.height();

        self.apply(self.bounds.translated(x_delta, y_delta), "pan")
    }

    /// Zooms toward the cursor. A positive `scroll_delta` zooms in. Each bound
    /// moves in proportion to its distance from the cursor, so the plane point
    /// under the cursor stays where it is.
    pub fn zoom(&mut self, scroll_delta: f64, cursor_x: f64, cursor_y: f64) -> bool {
        if !scroll_delta.is_finite() || scroll_delta == 0.0 {
            return false;
        }

        let step = scroll_delta / ZOOM_DIVISOR;
        let x_fraction = cursor_x / f64::from(self.screen.width());
        let y_fraction = cursor_y / f64::from(self.screen.height());
        let x_diff = self.bounds.width();
        let y_diff = self.bounds.height();

        let zoomed = ViewportBounds::from_extents(
            self.bounds.min_x() + step * x_fraction * x_diff,
            self.bounds.min_y() + step * (1.0 - y_fraction) * y_diff,
            self.bounds.max_x() - step * (1.0 - x_fraction) * x_diff,
            self.bounds.max_y() - step * y_fraction * y_diff,
        );

        self.apply(zoomed, "zoom")
    }

    /// Returns the budget after the adjustment.
    pub fn adjust_iterations(&mut self, direction: IterationDirection) -> IterationBudget {
        self.iterations = self.iterations.adjusted(direction);
        self.iterations
    }

    /// Restores the configured bounds and budget, keeping the current screen.
    pub fn reset(&mut self, config: &ViewportConfig) {
        self.bounds = config.bounds;
        self.iterations = config.iterations;
        self.fit_to_screen();
    }

    fn fit_to_screen(&mut self) {
        let max_y = self.bounds.min_y() + self.bounds.width() * self.screen.aspect_ratio();
        let fitted = self.bounds.with_max_y(max_y);
        self.apply(fitted, "resize");
    }

    fn apply<E: std::fmt::Display>(&mut self, bounds: Result<ViewportBounds, E>, op: &str) -> bool {
        match bounds {
            Ok(bounds) => {
                self.bounds = bounds;
                true
            }
            Err(error) => {
                log::warn!("{} rejected, keeping previous view: {}", op, error);
                false
            }
        }
    }
}
