use thiserror::Error;

/// Reasons a [`ViewportState`](super::ViewportState) mutation is refused.
///
/// A refused mutation always leaves the viewport untouched.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("zoom factor must be positive and finite: {factor}")]
    InvalidZoomFactor { factor: f64 },
    #[error("viewport center must be finite: ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
}
