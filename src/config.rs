use std::path::PathBuf;
use crate::core::viewport::viewport_config::ViewportConfig;

pub const DEFAULT_TITLE: &str = "mandel";
pub const DEFAULT_VERTEX_SHADER: &str = "shaders/vert.wgsl";
pub const DEFAULT_FRAGMENT_SHADER: &str = "shaders/frag.wgsl";
pub const DEFAULT_GRADIENT: &str = "assets/gradient.png";

/// Everything the viewer needs at start-up. Asset paths are resolved against
/// the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub viewport: ViewportConfig,
    pub vertex_shader_path: PathBuf,
    pub fragment_shader_path: PathBuf,
    pub gradient_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            viewport: ViewportConfig::default(),
            vertex_shader_path: PathBuf::from(DEFAULT_VERTEX_SHADER),
            fragment_shader_path: PathBuf::from(DEFAULT_FRAGMENT_SHADER),
            gradient_path: PathBuf::from(DEFAULT_GRADIENT),
        }
    }
}
