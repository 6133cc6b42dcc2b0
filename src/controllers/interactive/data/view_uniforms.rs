use bytemuck::{Pod, Zeroable};
use crate::core::viewport::state::ViewportState;

/// Per-frame shader inputs, laid out to match `ViewUniforms` in the fragment
/// shader. 32 bytes, a multiple of the 16-byte uniform alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub lower_left: [f32; 2],
    pub upper_right: [f32; 2],
    pub viewport_dimensions: [f32; 2],
    pub max_iterations: u32,
    pub _padding: u32,
}

impl From<&ViewportState> for ViewUniforms {
    fn from(state: &ViewportState) -> Self {
        let lower_left = state.bounds().lower_left();
        let upper_right = state.bounds().upper_right();
        let screen = state.screen();

        Self {
            lower_left: [lower_left.real as f32, lower_left.imag as f32],
            upper_right: [upper_right.real as f32, upper_right.imag as f32],
            viewport_dimensions: [screen.width() as f32, screen.height() as f32],
            max_iterations: state.iterations().get(),
            _padding: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::viewport_config::ViewportConfig;

    #[test]
    fn uniforms_mirror_viewport_state() {
        let mut state = ViewportState::new(&ViewportConfig::default());
        state.resize(2000, 1000);

        let uniforms = ViewUniforms::from(&state);

        assert_eq!(uniforms.lower_left, [-2.5, -2.0]);
        assert_eq!(uniforms.upper_right, [1.5, 0.0]);
        assert_eq!(uniforms.viewport_dimensions, [2000.0, 1000.0]);
        assert_eq!(uniforms.max_iterations, 430);
    }

    #[test]
    fn uniforms_are_uniform_buffer_sized() {
        let uniforms = ViewUniforms::from(&ViewportState::new(&ViewportConfig::default()));

        assert_eq!(std::mem::size_of::<ViewUniforms>(), 32);
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 32);
    }
}
