//! CPU implementation of the render ports, used for headless snapshots,
//! tests and benchmarks.

mod backend;
pub mod texel_texture;

pub use backend::SoftwareBackend;
pub use texel_texture::TexelTexture;
