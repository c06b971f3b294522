use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, error, info, warn};
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

use crate::controllers::interactive::ExplorerSession;
use crate::controllers::interactive::ports::RenderTargetPort;
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::fractals::FractalKinds;
use crate::core::resolution::RenderTarget;
use crate::presenters::pixels::errors::PresenterError;
use crate::presenters::pixels::frame::GpuFrame;
use crate::presenters::pixels::kernels::FractalKernels;
use crate::presenters::pixels::quad::QuadPipeline;
use crate::presenters::pixels::target::{FractalTexture, clamp_target};

/// Tessellated egui output for one frame.
pub struct OverlayPaint {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Owns every GPU resource of the explorer: the `pixels` surface (used only
/// for its device and swap chain), both compute kernels, the display quad,
/// the compute output texture and the egui renderer.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    kernels: FractalKernels,
    quad: QuadPipeline,
    texture: FractalTexture,
    viewport: FramebufferSize,
    max_texture_dimension: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, target: RenderTarget) -> Result<Self, PresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // The pixel buffer is never drawn; the default webgl2 limits would rule
        // out compute shaders, so ask for the full default limits instead.
        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .device_descriptor(wgpu::DeviceDescriptor {
                label: Some("julia-explorer-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            })
            .build()?;

        let info = pixels.adapter().get_info();
        info!("using {} ({:?} backend)", info.name, info.backend);

        let limits = pixels.device().limits();
        if limits.max_compute_workgroups_per_dimension == 0 {
            return Err(PresenterError::ComputeUnsupported {
                limit: "max_compute_workgroups_per_dimension",
            });
        }

        let device = pixels.device();
        let kernels = FractalKernels::new(device);
        let quad = QuadPipeline::new(device, pixels.render_texture_format());
        let max_texture_dimension = limits.max_texture_dimension_2d;
        let texture = FractalTexture::new(
            device,
            &kernels,
            &quad,
            clamp_target(target, max_texture_dimension),
        );

        let egui_renderer = EguiRenderer::new(
            device,
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            kernels,
            quad,
            texture,
            viewport: FramebufferSize::new(size.width, size.height),
            max_texture_dimension,
        })
    }

    /// Runs one session frame on the GPU and draws the overlay on top.
    pub fn render(
        &mut self,
        session: &mut ExplorerSession,
        overlay: OverlayPaint,
    ) -> Result<(), PresenterError> {
        if self.viewport.is_empty() {
            return Ok(());
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.viewport.width, self.viewport.height],
            pixels_per_point: overlay.pixels_per_point,
        };

        self.pixels.render_with(|encoder, render_target, context| {
            let mut frame = GpuFrame {
                encoder: &mut *encoder,
                surface: render_target,
                queue: &context.queue,
                kernels: &self.kernels,
                quad: &self.quad,
                texture: &self.texture,
                viewport: self.viewport,
                program: FractalKinds::default(),
            };
            session.tick(&mut frame);

            for (id, delta) in &overlay.textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &overlay.primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &overlay.primitives, &screen_descriptor);
            }

            for id in &overlay.textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    #[must_use]
    pub fn allocated_target(&self) -> RenderTarget {
        self.texture.target()
    }
}

impl RenderTargetPort for PixelsPresenter {
    fn reallocate(&mut self, target: RenderTarget) {
        let clamped = clamp_target(target, self.max_texture_dimension);

        if clamped != target {
            warn!(
                "compute target {}x{} exceeds the device limit, using {}x{}",
                target.h_res, target.v_res, clamped.h_res, clamped.v_res
            );
        }

        self.texture = FractalTexture::new(self.pixels.device(), &self.kernels, &self.quad, clamped);
    }

    fn set_viewport(&mut self, framebuffer: FramebufferSize) {
        if framebuffer.is_empty() {
            debug!("window minimized, pausing frames");
            self.viewport = framebuffer;
            return;
        }

        if let Err(err) = self
            .pixels
            .resize_surface(framebuffer.width, framebuffer.height)
        {
            error!("failed to resize surface to {}x{}: {err}", framebuffer.width, framebuffer.height);
            return;
        }

        self.viewport = framebuffer;
    }
}
