use crate::controllers::interactive::data::view_uniforms::ViewUniforms;
use crate::controllers::interactive::events::{InputEvent, Key, MouseButton};
use crate::core::data::iteration_budget::{IterationBudget, IterationDirection};
use crate::core::viewport::state::ViewportState;
use crate::core::viewport::viewport_config::ViewportConfig;

const DRAG_BUTTON: MouseButton = MouseButton::Left;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlResponse {
    pub close_requested: bool,
    pub view_changed: bool,
    /// Budget after a key press, set for every pressed key.
    pub iterations_report: Option<IterationBudget>,
    pub overlay_toggled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct DragState {
    held: bool,
    last_cursor: Option<(f64, f64)>,
}

/// Owns the session's [`ViewportState`] and turns [`InputEvent`]s into
/// viewport operations.
pub struct InteractiveController {
    config: ViewportConfig,
    state: ViewportState,
    drag: DragState,
}

impl InteractiveController {
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            state: ViewportState::new(&config),
            config,
            drag: DragState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn uniforms(&self) -> ViewUniforms {
        ViewUniforms::from(&self.state)
    }

    /// Last known cursor position, if the cursor has moved since start-up.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.drag.last_cursor
    }

    pub fn handle(&mut self, event: InputEvent) -> ControlResponse {
        let mut response = ControlResponse::default();

        match event {
            InputEvent::Resize { width, height } => {
                response.view_changed = self.state.resize(width, height);
            }
            InputEvent::MouseMove { x, y } => {
                if self.drag.held
                    && let Some((last_x, last_y)) = self.drag.last_cursor
                {
                    response.view_changed = self.state.pan(x - last_x, y - last_y);
                }
                self.drag.last_cursor = Some((x, y));
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == DRAG_BUTTON {
                    self.drag.held = pressed;
                }
            }
            InputEvent::Scroll { delta } => {
                let (x, y) = self
                    .drag
                    .last_cursor
                    .unwrap_or_else(|| self.state.screen().center());
                response.view_changed = self.state.zoom(delta, x, y);
            }
            InputEvent::Key { key, pressed: true } => self.handle_key(key, &mut response),
            InputEvent::Key { pressed: false, .. } => {}
        }

        if response.view_changed {
            let bounds = self.state.bounds();
            log::debug!(
                "view ({}, {}) - ({}, {})",
                bounds.min_x(),
                bounds.min_y(),
                bounds.max_x(),
                bounds.max_y()
            );
        }

        response
    }

    pub fn reset_view(&mut self) {
        self.state.reset(&self.config);
    }

    /// Drops a held drag, e.g. when the window loses focus mid-drag and the
    /// button release is never delivered.
    pub fn release_drag(&mut self) {
        self.drag.held = false;
    }

    fn handle_key(&mut self, key: Key, response: &mut ControlResponse) {
        match key {
            Key::Escape => response.close_requested = true,
            Key::ArrowUp => {
                self.state.adjust_iterations(IterationDirection::Increase);
            }
            Key::ArrowDown => {
                self.state.adjust_iterations(IterationDirection::Decrease);
            }
            Key::R => {
                self.reset_view();
                response.view_changed = true;
            }
            Key::H => response.overlay_toggled = true,
            Key::Other => {}
        }

        response.iterations_report = Some(self.state.iterations());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn controller() -> InteractiveController {
        InteractiveController::new(ViewportConfig::default())
    }

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, pressed: true }
    }

    #[test]
    fn mouse_move_without_button_does_not_pan() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::MouseMove { x: 10.0, y: 10.0 });
        let response = controller.handle(InputEvent::MouseMove { x: 300.0, y: 450.0 });

        assert!(!response.view_changed);
        assert_eq!(controller.state().bounds(), before);
        assert_eq!(controller.cursor(), Some((300.0, 450.0)));
    }

    #[test]
    fn non_drag_button_does_not_pan() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::MouseMove { x: 10.0, y: 10.0 });
        controller.handle(press(MouseButton::Right));
        controller.handle(InputEvent::MouseMove { x: 200.0, y: 10.0 });

        assert_eq!(controller.state().bounds(), before);
    }

    #[test]
    fn first_move_after_press_only_records_position() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(press(MouseButton::Left));
        let response = controller.handle(InputEvent::MouseMove { x: 500.0, y: 500.0 });

        assert!(!response.view_changed);
        assert_eq!(controller.state().bounds(), before);
    }

    #[test]
    fn left_drag_pans_and_release_stops() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::MouseMove { x: 500.0, y: 500.0 });
        controller.handle(press(MouseButton::Left));
        let response = controller.handle(InputEvent::MouseMove { x: 600.0, y: 500.0 });

        assert!(response.view_changed);
        assert_approx_eq(controller.state().bounds().min_x(), before.min_x() - 0.4);

        controller.handle(release(MouseButton::Left));
        let moved = controller.state().bounds();
        controller.handle(InputEvent::MouseMove { x: 900.0, y: 100.0 });

        assert_eq!(controller.state().bounds(), moved);
    }

    #[test]
    fn drag_there_and_back_restores_view() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::MouseMove { x: 100.0, y: 100.0 });
        controller.handle(press(MouseButton::Left));
        controller.handle(InputEvent::MouseMove { x: 173.0, y: 41.0 });
        controller.handle(InputEvent::MouseMove { x: 100.0, y: 100.0 });

        let after = controller.state().bounds();
        assert_approx_eq(after.min_x(), before.min_x());
        assert_approx_eq(after.min_y(), before.min_y());
        assert_approx_eq(after.max_x(), before.max_x());
        assert_approx_eq(after.max_y(), before.max_y());
    }

    #[test]
    fn release_drag_stops_panning() {
        let mut controller = controller();

        controller.handle(InputEvent::MouseMove { x: 100.0, y: 100.0 });
        controller.handle(press(MouseButton::Left));
        controller.release_drag();
        let before = controller.state().bounds();
        controller.handle(InputEvent::MouseMove { x: 300.0, y: 300.0 });

        assert_eq!(controller.state().bounds(), before);
    }

    #[test]
    fn scroll_zooms_toward_last_cursor() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::MouseMove { x: 0.0, y: 0.0 });
        let response = controller.handle(InputEvent::Scroll { delta: 1.0 });
        let after = controller.state().bounds();

        // cursor on the top-left corner pins min_x and max_y
        assert!(response.view_changed);
        assert_approx_eq(after.min_x(), before.min_x());
        assert_approx_eq(after.max_y(), before.max_y());
        assert_approx_eq(after.max_x(), before.max_x() - 0.4);
        assert_approx_eq(after.min_y(), before.min_y() + 0.4);
    }

    #[test]
    fn scroll_before_any_cursor_zooms_at_center() {
        let mut controller = controller();
        let before = controller.state().bounds();

        controller.handle(InputEvent::Scroll { delta: 1.0 });
        let after = controller.state().bounds();

        assert_approx_eq(after.center().real, before.center().real);
        assert_approx_eq(after.center().imag, before.center().imag);
    }

    #[test]
    fn resize_event_updates_screen_and_bounds() {
        let mut controller = controller();

        let response = controller.handle(InputEvent::Resize {
            width: 2000,
            height: 1000,
        });

        assert!(response.view_changed);
        assert_eq!(controller.state().bounds().max_y(), 0.0);
        assert_eq!(controller.uniforms().viewport_dimensions, [2000.0, 1000.0]);
    }

    #[test]
    fn zero_resize_reports_no_change() {
        let mut controller = controller();

        let response = controller.handle(InputEvent::Resize {
            width: 0,
            height: 0,
        });

        assert!(!response.view_changed);
        assert_eq!(controller.state().screen().width(), 1000);
    }

    #[test]
    fn arrow_keys_adjust_iterations() {
        let mut controller = controller();

        let up = controller.handle(key(Key::ArrowUp));
        let down = controller.handle(key(Key::ArrowDown));

        assert_eq!(up.iterations_report.map(IterationBudget::get), Some(516));
        assert_eq!(down.iterations_report.map(IterationBudget::get), Some(412));
        assert_eq!(controller.uniforms().max_iterations, 412);
    }

    #[test]
    fn every_key_press_reports_iterations() {
        let mut controller = controller();

        for pressed in [Key::Escape, Key::H, Key::Other] {
            let response = controller.handle(key(pressed));

            assert_eq!(response.iterations_report.map(IterationBudget::get), Some(430));
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let mut controller = controller();

        let response = controller.handle(InputEvent::Key {
            key: Key::ArrowUp,
            pressed: false,
        });

        assert_eq!(response, ControlResponse::default());
        assert_eq!(controller.state().iterations().get(), 430);
    }

    #[test]
    fn escape_requests_close() {
        let mut controller = controller();

        let response = controller.handle(key(Key::Escape));

        assert!(response.close_requested);
        assert!(!response.view_changed);
    }

    #[test]
    fn r_resets_view_and_iterations() {
        let mut controller = controller();
        controller.handle(InputEvent::Scroll { delta: 3.0 });
        controller.handle(key(Key::ArrowUp));

        let response = controller.handle(key(Key::R));

        assert!(response.view_changed);
        assert_eq!(response.iterations_report.map(IterationBudget::get), Some(430));
        assert_eq!(controller.state().bounds(), ViewportConfig::default().bounds);
    }

    #[test]
    fn h_toggles_overlay_only() {
        let mut controller = controller();
        let before = *controller.state();

        let response = controller.handle(key(Key::H));

        assert!(response.overlay_toggled);
        assert_eq!(*controller.state(), before);
    }
}
