//! GUI input adapter for the interactive viewer.
//!
//! This module provides a windowed interface using winit for window management,
//! a wgpu presenter for drawing, and egui for the optional view overlay.

pub mod app;
pub mod commands;
