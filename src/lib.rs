pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod presenters;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, ExplorerConfig};
pub use controllers::interactive::ExplorerSession;
pub use controllers::snapshot::{SnapshotController, SnapshotError};
pub use presenters::file::PpmFilePresenter;
pub use presenters::software::SoftwareBackend;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
