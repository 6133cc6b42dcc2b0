//! wgpu presenter drawn through the `pixels` surface: the fractal quad
//! first, then the egui overlay on top.

mod gradient_texture;
mod mandelbrot_renderer;
mod shader_program;

pub mod factory;
pub mod presenter;
