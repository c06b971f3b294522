use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::resolution::render_target::{RenderTarget, ResolutionUpdate};

/// Keeps the compute-target resolution in step with the framebuffer and the
/// supersampling toggle.
///
/// The policy only recomputes on a resize or a supersampling toggle; it is
/// never consulted per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameResolutionPolicy {
    framebuffer: FramebufferSize,
    supersample_factor: u32,
    current: RenderTarget,
}

impl FrameResolutionPolicy {
    /// `supersample_factor` is the multiplier used while supersampling is on;
    /// with supersampling off the factor is always one.
    #[must_use]
    pub fn new(framebuffer: FramebufferSize, supersample_factor: u32, supersampling: bool) -> Self {
        let supersample_factor = supersample_factor.max(1);

        Self {
            framebuffer,
            supersample_factor,
            current: Self::target_for(framebuffer, supersample_factor, supersampling),
        }
    }

    #[must_use]
    pub fn framebuffer(&self) -> FramebufferSize {
        self.framebuffer
    }

    #[must_use]
    pub fn current(&self) -> RenderTarget {
        self.current
    }

    #[must_use]
    pub fn current_update(&self) -> ResolutionUpdate {
        ResolutionUpdate {
            target: self.current,
            viewport: self.framebuffer,
        }
    }

    /// Returns `None` for a zero-sized framebuffer (a minimized window); the
    /// previous target stays in place until a real size arrives.
    pub fn on_framebuffer_resize(
        &mut self,
        framebuffer: FramebufferSize,
        supersampling: bool,
    ) -> Option<ResolutionUpdate> {
        if framebuffer.is_empty() {
            return None;
        }

        self.framebuffer = framebuffer;
        Some(self.recompute(supersampling))
    }

    pub fn on_supersampling_toggled(&mut self, supersampling: bool) -> ResolutionUpdate {
        self.recompute(supersampling)
    }

    fn recompute(&mut self, supersampling: bool) -> ResolutionUpdate {
        self.current = Self::target_for(self.framebuffer, self.supersample_factor, supersampling);
        self.current_update()
    }

    fn target_for(framebuffer: FramebufferSize, factor: u32, supersampling: bool) -> RenderTarget {
        let factor = if supersampling { factor } else { 1 };
        RenderTarget::for_framebuffer(framebuffer, factor)
    }
}
