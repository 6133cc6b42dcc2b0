use crate::core::data::complex::Complex;
use crate::core::viewport::state::ViewportState;

/// What the "View" panel shows for one frame.
pub struct OverlayView<'a> {
    pub state: &'a ViewportState,
    pub cursor: Option<Complex>,
    pub frames_per_second: Option<f64>,
}

/// Draws the read-only view panel. Returns true when "Reset view" was clicked.
pub fn draw_overlay(ctx: &egui::Context, view: &OverlayView<'_>) -> bool {
    let mut reset_clicked = false;

    egui::Window::new("View")
        .default_pos([10.0, 10.0])
        .default_size([260.0, 200.0])
        .resizable(false)
        .show(ctx, |ui| {
            let bounds = view.state.bounds();
            ui.label(format!(
                "Real: [{:.6}, {:.6}]",
                bounds.min_x(),
                bounds.max_x()
            ));
            ui.label(format!(
                "Imag: [{:.6}, {:.6}]",
                bounds.min_y(),
                bounds.max_y()
            ));
            let centre = bounds.center();
            ui.label(format!("Centre: {:.6} {:+.6}i", centre.real, centre.imag));
            ui.label(format!("Max iterations: {}", view.state.iterations().get()));

            ui.separator();
            match view.cursor {
                Some(point) => ui.label(format!("Cursor: {:.6} {:+.6}i", point.real, point.imag)),
                None => ui.label("Cursor: -"),
            };

            let screen = view.state.screen();
            ui.label(format!("Window size: {}x{}", screen.width(), screen.height()));
            if let Some(rate) = view.frames_per_second {
                ui.label(format!("FPS: {:.1}", rate));
            }

            ui.separator();
            if ui.button("Reset view").clicked() {
                reset_clicked = true;
            }
        });

    reset_clicked
}
