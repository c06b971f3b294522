use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("failed to create the GPU surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize the GPU surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("the adapter cannot run compute shaders ({limit} is zero)")]
    ComputeUnsupported { limit: &'static str },
}
