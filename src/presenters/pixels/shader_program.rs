use pixels::wgpu;
use crate::errors::{ShaderStage, ViewerError};

/// Compiles WGSL `source`, returning the compiler's diagnostic on failure
/// instead of letting wgpu's uncaptured-error handler panic.
pub fn compile_shader(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, ViewerError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.display_name()),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    check_error_scope(device, stage)?;
    Ok(module)
}

/// Pops the innermost error scope and maps a captured validation error onto
/// `stage`.
pub fn check_error_scope(device: &wgpu::Device, stage: ShaderStage) -> Result<(), ViewerError> {
    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(ViewerError::ShaderCompilationFailure {
            stage,
            diagnostic: error.to_string(),
        }),
        None => Ok(()),
    }
}
