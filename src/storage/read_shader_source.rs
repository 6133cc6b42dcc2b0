use std::path::Path;
use crate::errors::ViewerError;

pub fn read_shader_source(filepath: impl AsRef<Path>) -> Result<String, ViewerError> {
    let filepath = filepath.as_ref();

    std::fs::read_to_string(filepath).map_err(|error| ViewerError::AssetFailure {
        path: filepath.to_path_buf(),
        message: error.to_string(),
    })
}
