//! Interactive window: winit for events, the pixels/wgpu presenter for
//! frames and egui for the overlay.

mod app;
mod commands;
mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
