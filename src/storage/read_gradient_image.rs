use image::RgbaImage;
use std::path::Path;
use crate::errors::ViewerError;

/// One row of RGBA8 texels, ready to upload as a 1-D texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientImage {
    width: u32,
    texels: Vec<u8>,
}

impl GradientImage {
    /// Takes the bottom row of `image`. Gradient files are stored top-down but
    /// the texture is read as if the image were flipped vertically, so the
    /// first texel row is the file's last one.
    pub fn from_rgba(image: &RgbaImage) -> Result<Self, String> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(format!("gradient image is empty ({}x{})", width, height));
        }

        let row_len = width as usize * 4;
        let row_start = (height as usize - 1) * row_len;
        let texels = image.as_raw()[row_start..row_start + row_len].to_vec();

        Ok(Self { width, texels })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }
}

pub fn read_gradient_image(filepath: impl AsRef<Path>) -> Result<GradientImage, ViewerError> {
    let filepath = filepath.as_ref();
    let asset_failure = |message: String| ViewerError::AssetFailure {
        path: filepath.to_path_buf(),
        message,
    };

    let image = image::open(filepath).map_err(|error| asset_failure(error.to_string()))?;

    GradientImage::from_rgba(&image.to_rgba8()).map_err(asset_failure)
}
