//! Viewport state of an interactive session and the operations that change it.

pub mod state;
pub mod viewport_config;
