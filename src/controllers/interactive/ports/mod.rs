//! Port definitions for the interactive controller.
//!
//! The GPU (or a CPU stand-in) is reached only through these traits: a
//! compute stage that fills the output texture, a display stage that draws
//! it, and the render target the two share.

pub mod compute_stage;
pub mod display_stage;
pub mod render_target;

#[cfg(test)]
pub(crate) mod recording;

pub use compute_stage::{ComputeStagePort, PendingWrites, VisibleWrites};
pub use display_stage::DisplayStagePort;
pub use render_target::RenderTargetPort;
