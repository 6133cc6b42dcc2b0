use std::time::Instant;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};
use crate::controllers::interactive::{InputEvent, InteractiveController};
use crate::core::data::complex::Complex;
use crate::core::util::frame_rate::FrameRateCounter;
use crate::core::util::screen_to_plane_coords::screen_to_plane_coords;
use crate::core::viewport::state::ViewportState;
use crate::errors::ViewerError;
use crate::input::gui::app::overlay::{OverlayView, draw_overlay};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::winit_input::translate_window_event;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: InteractiveController,
    frame_rate: FrameRateCounter,
    last_frame: Instant,
    overlay_visible: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            frame_rate: FrameRateCounter::new(),
            last_frame: Instant::now(),
            overlay_visible: false,
            egui_ctx,
            egui_state,
        }
    }

    /// Drives the event loop until the window closes or Escape is pressed.
    /// The window is redrawn continuously.
    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<()>) -> Result<(), ViewerError> {
        event_loop
            .run(|event, elwt| match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let egui_consumed = self.egui_state.on_window_event(window, event).consumed;

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::RedrawRequested => {
                            if let Err(e) = self.redraw(window) {
                                log::error!("render error: {}", e);
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => self.resize(size.width, size.height),
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            self.resize(size.width, size.height);
                        }
                        WindowEvent::Focused(false) => self.controller.release_drag(),
                        _ => {
                            if let Some(input) = translate_window_event(event)
                                && (!egui_consumed || bypasses_overlay(&input))
                                && self.apply(input)
                            {
                                elwt.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => window.request_redraw(),
                _ => {}
            })
            .map_err(|e| ViewerError::WindowCreationFailure(e.to_string()))
    }

    /// Zero sizes (a minimised window) are skipped by both sides.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.controller.handle(InputEvent::Resize { width, height });
    }

    /// Returns true when the controller asked to close the window.
    fn apply(&mut self, input: InputEvent) -> bool {
        let response = self.controller.handle(input);

        if let Some(iterations) = response.iterations_report {
            println!("Max iterations: {}", iterations.get());
        }
        if response.overlay_toggled {
            self.overlay_visible = !self.overlay_visible;
        }

        response.close_requested
    }

    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        let uniforms = self.controller.uniforms();
        self.presenter.render(&uniforms, egui_output, &self.egui_ctx)?;

        let now = Instant::now();
        if let Some(rate) = self.frame_rate.record_frame(now - self.last_frame) {
            println!("{}", format_frame_rate(rate));
        }
        self.last_frame = now;

        Ok(())
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let overlay_visible = self.overlay_visible;
        let state = *self.controller.state();
        let cursor = self
            .controller
            .cursor()
            .and_then(|cursor| cursor_plane_point(&state, cursor));
        let frames_per_second = self.frame_rate.last_rate();
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            if overlay_visible {
                reset_clicked = draw_overlay(
                    ctx,
                    &OverlayView {
                        state: &state,
                        cursor,
                        frames_per_second,
                    },
                );
            }
        });

        if reset_clicked {
            self.controller.reset_view();
            println!("Max iterations: {}", self.controller.state().iterations().get());
        }

        output
    }
}

/// Plane point under the cursor, or `None` once it leaves the window (winit
/// keeps reporting positions outside it mid-drag).
fn cursor_plane_point(state: &ViewportState, (x, y): (f64, f64)) -> Option<Complex> {
    let point = screen_to_plane_coords(x, y, state.screen(), state.bounds());
    state.bounds().contains_point(point).then_some(point)
}

/// Six significant digits, the way C++ streams print a double by default.
fn format_frame_rate(rate: f64) -> String {
    if rate <= 0.0 || !rate.is_finite() {
        return rate.to_string();
    }

    let integer_digits = rate.log10().floor() as i32 + 1;
    let decimals = (6 - integer_digits).max(0) as usize;
    let formatted = format!("{:.*}", decimals, rate);

    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

/// Events that must reach the controller even over the overlay, so a drag
/// never gets stuck and the cursor position stays current.
fn bypasses_overlay(input: &InputEvent) -> bool {
    matches!(
        input,
        InputEvent::MouseMove { .. }
            | InputEvent::MouseButton { pressed: false, .. }
            | InputEvent::Key { pressed: false, .. }
    )
}

#[cfg(test)]
mod tests {
    use super::{bypasses_overlay, cursor_plane_point, format_frame_rate};
    use crate::controllers::interactive::{InputEvent, Key, MouseButton};
    use crate::core::viewport::state::ViewportState;
    use crate::core::viewport::viewport_config::ViewportConfig;

    #[test]
    fn cursor_inside_window_maps_to_plane() {
        let state = ViewportState::new(&ViewportConfig::default());

        let point = cursor_plane_point(&state, (500.0, 500.0));

        assert_eq!(point, Some(state.bounds().center()));
    }

    #[test]
    fn cursor_outside_window_has_no_plane_point() {
        let state = ViewportState::new(&ViewportConfig::default());

        assert_eq!(cursor_plane_point(&state, (-20.0, 500.0)), None);
        assert_eq!(cursor_plane_point(&state, (500.0, 1400.0)), None);
    }

    #[test]
    fn releases_and_motion_bypass_overlay() {
        assert!(bypasses_overlay(&InputEvent::MouseMove { x: 1.0, y: 2.0 }));
        assert!(bypasses_overlay(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false
        }));
        assert!(bypasses_overlay(&InputEvent::Key {
            key: Key::ArrowUp,
            pressed: false
        }));
    }

    #[test]
    fn presses_and_scroll_respect_overlay() {
        assert!(!bypasses_overlay(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true
        }));
        assert!(!bypasses_overlay(&InputEvent::Key {
            key: Key::Escape,
            pressed: true
        }));
        assert!(!bypasses_overlay(&InputEvent::Scroll { delta: 1.0 }));
    }

    #[test]
    fn frame_rate_prints_six_significant_digits() {
        assert_eq!(format_frame_rate(59.98123456789), "59.9812");
        assert_eq!(format_frame_rate(144.0), "144");
        assert_eq!(format_frame_rate(1234.5678), "1234.57");
        assert_eq!(format_frame_rate(0.5), "0.5");
    }
}
