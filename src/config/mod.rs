//! Startup configuration, read from an optional TOML file.

mod explorer_config;

pub use explorer_config::{
    ConfigError, DEFAULT_CONFIG_PATH, ExplorerConfig, RenderConfig, SnapshotConfig, ToggleConfig,
    ViewConfig, WindowConfig,
};
