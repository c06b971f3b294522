use crate::core::data::framebuffer_size::FramebufferSize;

/// Resolution of the compute target: framebuffer size times the supersample
/// factor on each axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub h_res: u32,
    pub v_res: u32,
    pub supersample_factor: u32,
}

impl RenderTarget {
    /// Saturates instead of overflowing; backends clamp to their own texture
    /// limits anyway.
    #[must_use]
    pub fn for_framebuffer(framebuffer: FramebufferSize, supersample_factor: u32) -> Self {
        let factor = supersample_factor.max(1);

        Self {
            h_res: framebuffer.width.saturating_mul(factor),
            v_res: framebuffer.height.saturating_mul(factor),
            supersample_factor: factor,
        }
    }

    #[must_use]
    pub const fn texel_count(&self) -> usize {
        self.h_res as usize * self.v_res as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.h_res == 0 || self.v_res == 0
    }
}

/// What a collaborator has to do after the resolution changed: reallocate the
/// compute target at `target` and set the viewport to the raw `viewport` size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolutionUpdate {
    pub target: RenderTarget,
    pub viewport: FramebufferSize,
}
