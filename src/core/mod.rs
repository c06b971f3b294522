//! Pure domain code: world/screen math, the viewport, resolution policy and
//! the reference fractal kernels. Nothing in here touches a window or a GPU.

pub mod data;
pub mod fractals;
pub mod render;
pub mod resolution;
pub mod viewport;
