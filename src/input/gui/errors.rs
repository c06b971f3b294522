use thiserror::Error;

use crate::core::viewport::ViewportError;
use crate::presenters::pixels::PresenterError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Presenter(#[from] PresenterError),
    #[error("invalid initial view: {0}")]
    Viewport(#[from] ViewportError),
}
