pub mod read_gradient_image;
pub mod read_shader_source;

pub use read_gradient_image::{GradientImage, read_gradient_image};
pub use read_shader_source::read_shader_source;
