use pixels::wgpu;

use crate::core::resolution::RenderTarget;
use crate::presenters::pixels::kernels::{FractalKernels, STORAGE_FORMAT};
use crate::presenters::pixels::quad::QuadPipeline;

/// The compute output texture plus the bind groups that write and sample it.
/// Rebuilt whenever the render target is reallocated.
pub struct FractalTexture {
    target: RenderTarget,
    _texture: wgpu::Texture,
    compute_bind_group: wgpu::BindGroup,
    display_bind_group: wgpu::BindGroup,
}

impl FractalTexture {
    pub fn new(
        device: &wgpu::Device,
        kernels: &FractalKernels,
        quad: &QuadPipeline,
        target: RenderTarget,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("fractal-output"),
            size: wgpu::Extent3d {
                width: target.h_res.max(1),
                height: target.v_res.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: STORAGE_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            target,
            compute_bind_group: kernels.bind_group(device, &view),
            display_bind_group: quad.bind_group(device, &view),
            _texture: texture,
        }
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    pub fn compute_bind_group(&self) -> &wgpu::BindGroup {
        &self.compute_bind_group
    }

    pub fn display_bind_group(&self) -> &wgpu::BindGroup {
        &self.display_bind_group
    }
}

/// Shrinks `target` so neither side exceeds `max_dimension`.
pub fn clamp_target(target: RenderTarget, max_dimension: u32) -> RenderTarget {
    RenderTarget {
        h_res: target.h_res.min(max_dimension),
        v_res: target.v_res.min(max_dimension),
        supersample_factor: target.supersample_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_target_limits_each_axis() {
        let target = RenderTarget {
            h_res: 10_000,
            v_res: 600,
            supersample_factor: 2,
        };

        let clamped = clamp_target(target, 8192);

        assert_eq!((clamped.h_res, clamped.v_res), (8192, 600));
        assert_eq!(clamp_target(clamped, 8192), clamped);
    }
}
