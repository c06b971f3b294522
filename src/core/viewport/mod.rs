//! World-space window over the complex plane.

pub mod errors;
mod viewport_state;

pub use errors::ViewportError;
pub use viewport_state::{DEFAULT_CENTER, DEFAULT_SIZE, ViewportState};
