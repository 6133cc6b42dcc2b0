pub mod view_uniforms;

pub use view_uniforms::ViewUniforms;
