//! Compute-target resolution derived from the framebuffer and supersampling.

mod policy;
mod render_target;

pub use policy::FrameResolutionPolicy;
pub use render_target::{RenderTarget, ResolutionUpdate};
