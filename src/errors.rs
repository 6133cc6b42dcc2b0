use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Link,
}

impl ShaderStage {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vertex => "Vertex shader",
            Self::Fragment => "Fragment shader",
            Self::Link => "Shader program",
        }
    }
}

/// Start-up failures. Every variant is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    WindowCreationFailure(String),
    GraphicsLoaderFailure(String),
    ShaderCompilationFailure {
        stage: ShaderStage,
        diagnostic: String,
    },
    AssetFailure {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowCreationFailure(message) => {
                write!(f, "Couldn't create a window: {}", message)
            }
            Self::GraphicsLoaderFailure(message) => {
                write!(f, "Couldn't load the graphics device: {}", message)
            }
            Self::ShaderCompilationFailure { stage, diagnostic } => {
                write!(
                    f,
                    "{} compilation has failed\n{}",
                    stage.display_name(),
                    diagnostic
                )
            }
            Self::AssetFailure { path, message } => {
                write!(f, "Couldn't load {}: {}", path.display(), message)
            }
        }
    }
}

impl Error for ViewerError {}
