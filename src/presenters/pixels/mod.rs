//! wgpu rendering on top of the `pixels` surface.

pub mod errors;
mod frame;
mod kernels;
mod presenter;
mod quad;
mod target;
mod uniforms;

pub use errors::PresenterError;
pub use presenter::{OverlayPaint, PixelsPresenter};
