mod config;
mod controllers;
mod core;
mod errors;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use config::ViewerConfig;
pub use controllers::interactive::{
    ControlResponse, InputEvent, InteractiveController, Key, MouseButton, ViewUniforms,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_budget::{IterationBudget, IterationDirection};
pub use crate::core::data::screen_size::ScreenSize;
pub use crate::core::data::viewport_bounds::ViewportBounds;
pub use crate::core::util::frame_rate::FrameRateCounter;
pub use crate::core::util::screen_to_plane_coords::screen_to_plane_coords;
pub use crate::core::viewport::state::ViewportState;
pub use crate::core::viewport::viewport_config::ViewportConfig;
pub use errors::{ShaderStage, ViewerError};
pub use storage::{GradientImage, read_gradient_image, read_shader_source};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
