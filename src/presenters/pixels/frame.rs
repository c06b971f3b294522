use log::trace;
use pixels::wgpu;

use crate::controllers::interactive::ports::{
    ComputeStagePort, DisplayStagePort, PendingWrites, VisibleWrites,
};
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::fractals::FractalKinds;
use crate::core::render::{FrameUniforms, WorkgroupCount};
use crate::presenters::pixels::kernels::FractalKernels;
use crate::presenters::pixels::quad::QuadPipeline;
use crate::presenters::pixels::target::FractalTexture;
use crate::presenters::pixels::uniforms::GpuUniforms;

/// Records one frame's compute and display passes into the surface's command
/// encoder.
///
/// The dispatch is recorded when the barrier is requested: the compute pass is
/// opened, dispatched and closed there, and the display pass can only begin
/// after it. wgpu orders the storage writes of a closed pass before any later
/// pass samples the texture, so the pass boundary is the memory barrier.
pub struct GpuFrame<'a> {
    pub(crate) encoder: &'a mut wgpu::CommandEncoder,
    pub(crate) surface: &'a wgpu::TextureView,
    pub(crate) queue: &'a wgpu::Queue,
    pub(crate) kernels: &'a FractalKernels,
    pub(crate) quad: &'a QuadPipeline,
    pub(crate) texture: &'a FractalTexture,
    pub(crate) viewport: FramebufferSize,
    pub(crate) program: FractalKinds,
}

impl ComputeStagePort for GpuFrame<'_> {
    fn use_program(&mut self, kind: FractalKinds) {
        self.program = kind;
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        let target = self.texture.target();
        let mut uniforms = *uniforms;

        // The texture may have been clamped to the device limits; map the
        // whole window onto whatever was actually allocated.
        if !uniforms.matches_target(&target) {
            uniforms.resolution = (target.h_res, target.v_res);
        }

        self.kernels
            .write_uniforms(self.queue, &GpuUniforms::from(&uniforms));
    }

    fn dispatch(&mut self, groups: WorkgroupCount) -> PendingWrites {
        PendingWrites::new(groups)
    }

    fn memory_barrier(&mut self, writes: PendingWrites) -> VisibleWrites {
        let groups = writes.groups();
        let pipeline = self.kernels.pipeline(self.program);
        let bind_group = self.texture.compute_bind_group();

        if groups.total() > 0 {
            let mut pass = self.encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("fractal-pass"),
                timestamp_writes: None,
            });
            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, bind_group, &[]);
            pass.dispatch_workgroups(groups.x, groups.y, 1);
        }

        trace!("{} dispatch of {}x{} groups recorded", self.program, groups.x, groups.y);
        writes.into_visible()
    }
}

impl DisplayStagePort for GpuFrame<'_> {
    fn draw_quad(&mut self, _writes: VisibleWrites) {
        let quad = self.quad;
        let bind_group = self.texture.display_bind_group();

        let mut pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quad-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.surface,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        pass.set_viewport(
            0.0,
            0.0,
            self.viewport.width as f32,
            self.viewport.height as f32,
            0.0,
            1.0,
        );
        quad.draw(&mut pass, bind_group);
    }
}
