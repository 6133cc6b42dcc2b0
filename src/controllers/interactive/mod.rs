//! Interactive controller for real-time fractal viewing.
//!
//! This module is the application layer between an input adapter and the
//! presenter. It owns the viewport state and exposes it to the renderer as a
//! uniform snapshot.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values, independent of any windowing library
//! - **Output**: `ViewUniforms`, pulled by the presenter once per frame
//! - **Core**: viewport operations from `core/`

mod controller;
pub mod data;
pub mod events;

pub use controller::{ControlResponse, InteractiveController};
pub use data::ViewUniforms;
pub use events::{InputEvent, Key, MouseButton};
