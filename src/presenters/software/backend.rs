use log::{trace, warn};
use rayon::prelude::*;

use crate::controllers::interactive::ports::{
    ComputeStagePort, DisplayStagePort, PendingWrites, RenderTargetPort, VisibleWrites,
};
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::colouring::shade;
use crate::core::fractals::escape_time::iterate_point;
use crate::core::fractals::FractalKinds;
use crate::core::render::{FrameUniforms, WORKGROUP_SIZE, WorkgroupCount};
use crate::core::resolution::RenderTarget;
use crate::presenters::software::texel_texture::TexelTexture;

/// Runs the compute and display stages on the CPU.
///
/// `dispatch` evaluates the kernel for every texel in parallel with rayon and
/// returns once all writes are done, so the barrier has nothing left to wait
/// for. `draw_quad` resamples the texture to framebuffer size the way the
/// display quad does on the GPU.
#[derive(Debug)]
pub struct SoftwareBackend {
    program: FractalKinds,
    uniforms: Option<FrameUniforms>,
    texture: TexelTexture,
    viewport: FramebufferSize,
    frame: PixelBuffer,
}

impl SoftwareBackend {
    #[must_use]
    pub fn new(target: RenderTarget, viewport: FramebufferSize) -> Self {
        Self {
            program: FractalKinds::default(),
            uniforms: None,
            texture: TexelTexture::new(target),
            viewport,
            frame: PixelBuffer::new(viewport),
        }
    }

    /// The most recently drawn frame, top row first.
    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> PixelBuffer {
        self.frame
    }

    #[must_use]
    pub fn texture(&self) -> &TexelTexture {
        &self.texture
    }

    fn run_kernel(&mut self, uniforms: FrameUniforms, groups: WorkgroupCount) {
        let program = self.program;
        let seed = uniforms.seed.unwrap_or_default();
        let shading = uniforms.shading();

        // Invocations outside the uniform resolution or the texture are
        // discarded, as in the shader.
        let columns = (groups.x.saturating_mul(WORKGROUP_SIZE))
            .min(uniforms.resolution.0)
            .min(self.texture.width());
        let rows = (groups.y.saturating_mul(WORKGROUP_SIZE))
            .min(uniforms.resolution.1)
            .min(self.texture.height());

        if columns == 0 || rows == 0 {
            return;
        }

        self.texture
            .par_rows_mut()
            .take(rows as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, texel) in row.iter_mut().take(columns as usize).enumerate() {
                    let point = uniforms.texel_to_world(x as u32, y as u32);
                    let iterations = iterate_point(program, point, seed, shading.max_iterations);
                    *texel = shade(iterations, shading);
                }
            });
    }

    fn resolve_frame(&self) -> PixelBuffer {
        let width = self.viewport.width as usize;
        let height = self.viewport.height;
        let mut data = vec![0u8; self.viewport.pixel_count() * 3];

        if width > 0 {
            data.par_chunks_mut(width * 3)
                .enumerate()
                .for_each(|(row, pixels)| {
                    // Row 0 of the frame is the top of the window, which is
                    // v = 1 on the quad.
                    let v = 1.0 - (row as f32 + 0.5) / height as f32;

                    for (x, pixel) in pixels.chunks_exact_mut(3).enumerate() {
                        let u = (x as f32 + 0.5) / width as f32;
                        let colour = self.texture.sample_linear(u, v).to_colour();
                        pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
                    }
                });
        }

        PixelBuffer::from_data(self.viewport, data).unwrap_or_else(|err| {
            warn!("discarding resolved frame: {err}");
            PixelBuffer::new(self.viewport)
        })
    }
}

impl ComputeStagePort for SoftwareBackend {
    fn use_program(&mut self, kind: FractalKinds) {
        self.program = kind;
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        self.uniforms = Some(*uniforms);
    }

    fn dispatch(&mut self, groups: WorkgroupCount) -> PendingWrites {
        match self.uniforms {
            Some(uniforms) => {
                trace!("software dispatch of {}x{} groups", groups.x, groups.y);
                self.run_kernel(uniforms, groups);
            }
            None => warn!("dispatch without uniforms, texture left unchanged"),
        }

        PendingWrites::new(groups)
    }

    fn memory_barrier(&mut self, writes: PendingWrites) -> VisibleWrites {
        writes.into_visible()
    }
}

impl DisplayStagePort for SoftwareBackend {
    fn draw_quad(&mut self, _writes: VisibleWrites) {
        self.frame = self.resolve_frame();
    }
}

impl RenderTargetPort for SoftwareBackend {
    fn reallocate(&mut self, target: RenderTarget) {
        self.texture = TexelTexture::new(target);
    }

    fn set_viewport(&mut self, framebuffer: FramebufferSize) {
        self.viewport = framebuffer;
        self.frame = PixelBuffer::new(framebuffer);
    }
}

impl Default for SoftwareBackend {
    fn default() -> Self {
        let framebuffer = FramebufferSize::new(1, 1);
        Self::new(RenderTarget::for_framebuffer(framebuffer, 1), framebuffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExplorerConfig;
    use crate::controllers::interactive::ExplorerSession;
    use crate::core::data::colour::{Colour, Texel};
    use crate::core::data::complex::Complex;
    use crate::core::data::extent::Extent;

    fn uniforms(resolution: (u32, u32), seed: Option<Complex>) -> FrameUniforms {
        FrameUniforms {
            resolution,
            seed,
            blackout_interior: true,
            use_log_scale: false,
            ll_window_pos: Complex::new(-2.0, -2.0),
            window_size: Extent::square(4.0),
            max_iterations: 64,
        }
    }

    fn render(backend: &mut SoftwareBackend, kind: FractalKinds, uniforms: FrameUniforms) {
        let target = RenderTarget {
            h_res: uniforms.resolution.0,
            v_res: uniforms.resolution.1,
            supersample_factor: 1,
        };

        backend.use_program(kind);
        backend.upload_uniforms(&uniforms);
        let pending = backend.dispatch(WorkgroupCount::covering(&target, WORKGROUP_SIZE));
        let visible = backend.memory_barrier(pending);
        backend.draw_quad(visible);
    }

    fn target(width: u32, height: u32) -> RenderTarget {
        RenderTarget {
            h_res: width,
            v_res: height,
            supersample_factor: 1,
        }
    }

    #[test]
    fn mandelbrot_interior_is_black_and_corners_escape() {
        let framebuffer = FramebufferSize::new(33, 33);
        let mut backend = SoftwareBackend::new(target(33, 33), framebuffer);

        render(&mut backend, FractalKinds::Mandelbrot, uniforms((33, 33), None));

        // Texel 16 of 33 is centred on the origin, inside the set.
        assert_eq!(backend.texture().get(16, 16), Some(Texel::BLACK));
        assert_eq!(backend.frame().pixel(16, 16).unwrap(), Colour::default());
        assert_ne!(backend.texture().get(0, 0), Some(Texel::BLACK));
    }

    #[test]
    fn frame_is_flipped_so_the_top_row_is_the_top_of_the_window() {
        let framebuffer = FramebufferSize::new(8, 8);
        let mut backend = SoftwareBackend::new(target(8, 8), framebuffer);
        // Bottom rows sit inside the main cardioid, top rows escape at once.
        let mut uniforms = uniforms((8, 8), None);
        uniforms.ll_window_pos = Complex::new(-2.0, 0.0);

        render(&mut backend, FractalKinds::Mandelbrot, uniforms);

        let texture_bottom = backend.texture().get(4, 0).unwrap().to_colour();
        let texture_top = backend.texture().get(4, 7).unwrap().to_colour();
        assert_ne!(texture_bottom, texture_top);
        assert_eq!(backend.frame().pixel(4, 7).unwrap(), texture_bottom);
        assert_eq!(backend.frame().pixel(4, 0).unwrap(), texture_top);
    }

    #[test]
    fn julia_uses_the_seed() {
        let framebuffer = FramebufferSize::new(16, 16);
        let mut with_zero = SoftwareBackend::new(target(16, 16), framebuffer);
        let mut with_far = SoftwareBackend::new(target(16, 16), framebuffer);

        render(&mut with_zero, FractalKinds::Julia, uniforms((16, 16), Some(Complex::ORIGIN)));
        render(
            &mut with_far,
            FractalKinds::Julia,
            uniforms((16, 16), Some(Complex::new(3.0, 3.0))),
        );

        assert_eq!(with_zero.texture().get(8, 8), Some(Texel::BLACK));
        assert_ne!(with_far.texture().get(8, 8), Some(Texel::BLACK));
    }

    #[test]
    fn supersampled_texture_is_resolved_to_the_viewport() {
        let framebuffer = FramebufferSize::new(10, 6);
        let mut backend = SoftwareBackend::new(target(20, 12), framebuffer);

        render(&mut backend, FractalKinds::Mandelbrot, uniforms((20, 12), None));

        assert_eq!(backend.frame().size(), framebuffer);
        assert_eq!(backend.frame().buffer().len(), 10 * 6 * 3);
    }

    #[test]
    fn dispatch_without_uniforms_leaves_texture_untouched() {
        let mut backend = SoftwareBackend::new(target(4, 4), FramebufferSize::new(4, 4));

        let pending = backend.dispatch(WorkgroupCount { x: 1, y: 1 });
        let visible = backend.memory_barrier(pending);
        backend.draw_quad(visible);

        assert_eq!(backend.texture(), &TexelTexture::new(target(4, 4)));
    }

    #[test]
    fn render_target_port_reallocates_and_resizes() {
        let mut backend = SoftwareBackend::default();

        backend.apply(crate::core::resolution::ResolutionUpdate {
            target: target(40, 30),
            viewport: FramebufferSize::new(20, 15),
        });

        assert_eq!((backend.texture().width(), backend.texture().height()), (40, 30));
        assert_eq!(backend.frame().size(), FramebufferSize::new(20, 15));
    }

    #[test]
    fn session_renders_through_the_software_backend() {
        let framebuffer = FramebufferSize::new(32, 24);
        let mut session = ExplorerSession::new(&ExplorerConfig::default(), framebuffer).unwrap();
        let mut backend = SoftwareBackend::default();
        session.sync_render_target(&mut backend);
        session.lock_seed(Complex::new(-0.7, 0.27));

        session.tick(&mut backend);

        assert_eq!(backend.texture().width(), 64);
        assert_eq!(backend.frame().size(), framebuffer);
        assert!(backend.frame().buffer().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn minimized_window_keeps_the_texture_and_empties_the_frame() {
        let framebuffer = FramebufferSize::new(32, 24);
        let mut session = ExplorerSession::new(&ExplorerConfig::default(), framebuffer).unwrap();
        let mut backend = SoftwareBackend::default();
        session.sync_render_target(&mut backend);

        session.on_framebuffer_resize(FramebufferSize::new(0, 0), &mut backend);
        session.tick(&mut backend);

        assert_eq!(backend.texture().width(), 64);
        assert!(backend.frame().size().is_empty());

        session.on_framebuffer_resize(framebuffer, &mut backend);
        session.tick(&mut backend);

        assert_eq!(backend.frame().size(), framebuffer);
    }
}
