use bytemuck::{Pod, Zeroable};

use crate::core::render::FrameUniforms;

/// Byte layout of the `Uniforms` struct in `fractal.wgsl`.
///
/// The kernels run in `f32`, so very deep zooms lose precision on the GPU
/// even though the viewport itself is tracked in `f64`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuUniforms {
    pub resolution: [u32; 2],
    pub seed: [f32; 2],
    pub ll_window_pos: [f32; 2],
    pub window_size: [f32; 2],
    pub blackout_interior: u32,
    pub use_log_scale: u32,
    pub max_iterations: u32,
    pub _pad: u32,
}

impl From<&FrameUniforms> for GpuUniforms {
    fn from(uniforms: &FrameUniforms) -> Self {
        let seed = uniforms.seed.unwrap_or_default();

        Self {
            resolution: [uniforms.resolution.0, uniforms.resolution.1],
            seed: [seed.real as f32, seed.imag as f32],
            ll_window_pos: [
                uniforms.ll_window_pos.real as f32,
                uniforms.ll_window_pos.imag as f32,
            ],
            window_size: [
                uniforms.window_size.width as f32,
                uniforms.window_size.height as f32,
            ],
            blackout_interior: u32::from(uniforms.blackout_interior),
            use_log_scale: u32::from(uniforms.use_log_scale),
            max_iterations: uniforms.max_iterations,
            _pad: 0,
        }
    }
}
