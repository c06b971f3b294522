use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::resolution::{RenderTarget, ResolutionUpdate};

pub trait RenderTargetPort {
    /// (Re)allocates the compute output texture at `target`'s resolution.
    fn reallocate(&mut self, target: RenderTarget);

    /// Sets the draw viewport. Always the raw framebuffer size.
    fn set_viewport(&mut self, framebuffer: FramebufferSize);

    fn apply(&mut self, update: ResolutionUpdate) {
        self.reallocate(update.target);
        self.set_viewport(update.viewport);
    }
}
