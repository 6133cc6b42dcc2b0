//! Windowed viewer: winit event loop, egui overlay and the presenter port.

pub mod gui_app;
pub mod overlay;
pub mod ports;
pub mod winit_input;
