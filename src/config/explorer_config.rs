use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::extent::Extent;
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::fractals::FractalKinds;

pub const DEFAULT_CONFIG_PATH: &str = "julia_explorer.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub render: RenderConfig,
    pub toggles: ToggleConfig,
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            title: "Realtime Julia Renderer".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: [f64; 2],
    pub size: [f64; 2],
    /// World height of the window after a reset.
    pub reset_height: f64,
    /// Size multiplier per forward scroll notch.
    pub zoom_step: f64,
    pub invert_scroll: bool,
    pub pixels_per_scroll_line: f64,
    pub initial_seed: [f64; 2],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            size: [4.0, 4.0],
            reset_height: 4.0,
            zoom_step: 0.8,
            invert_scroll: false,
            pixels_per_scroll_line: 100.0,
            initial_seed: [0.0, 0.0],
        }
    }
}

impl ViewConfig {
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center[0], self.center[1])
    }

    #[must_use]
    pub fn size(&self) -> Extent {
        Extent::new(self.size[0], self.size[1])
    }

    #[must_use]
    pub fn initial_seed(&self) -> Complex {
        Complex::new(self.initial_seed[0], self.initial_seed[1])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Multiplier applied per axis while supersampling is enabled.
    pub supersample_factor: u32,
    pub max_iterations: u32,
    pub log_scale_max_iterations: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            supersample_factor: 2,
            max_iterations: 256,
            log_scale_max_iterations: 2048,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub interior_black: bool,
    pub log_scale: bool,
    pub supersampling: bool,
    pub cursor_locked: bool,
    pub aspect_unlocked: bool,
    pub fractal: FractalKinds,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            interior_black: true,
            log_scale: false,
            supersampling: true,
            cursor_locked: false,
            aspect_unlocked: true,
            fractal: FractalKinds::Julia,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    pub seed: [f64; 2],
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            output_path: PathBuf::from("output/julia.ppm"),
            seed: [-0.7, 0.27],
        }
    }
}

impl SnapshotConfig {
    #[must_use]
    pub fn framebuffer(&self) -> FramebufferSize {
        FramebufferSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        Complex::new(self.seed[0], self.seed[1])
    }
}

impl ExplorerConfig {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source, path)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults. A file
    /// that exists but does not parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            info!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load(path)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be non-zero"));
        }

        if !self.view.size().is_valid() {
            return Err(invalid("view.size", "both extents must be positive and finite"));
        }

        if !self.view.center().is_finite() {
            return Err(invalid("view.center", "must be finite"));
        }

        if !self.view.reset_height.is_finite() || self.view.reset_height <= 0.0 {
            return Err(invalid("view.reset_height", "must be positive and finite"));
        }

        if !(self.view.zoom_step > 0.0 && self.view.zoom_step < 1.0) {
            return Err(invalid("view.zoom_step", "must lie strictly between 0 and 1"));
        }

        if !self.view.pixels_per_scroll_line.is_finite() || self.view.pixels_per_scroll_line <= 0.0 {
            return Err(invalid("view.pixels_per_scroll_line", "must be positive and finite"));
        }

        if !self.view.initial_seed().is_finite() || !self.snapshot.seed().is_finite() {
            return Err(invalid("seed", "must be finite"));
        }

        if self.render.supersample_factor == 0 {
            return Err(invalid("render.supersample_factor", "must be at least 1"));
        }

        if self.render.max_iterations == 0 || self.render.log_scale_max_iterations == 0 {
            return Err(invalid("render.max_iterations", "iteration limits must be at least 1"));
        }

        if self.snapshot.framebuffer().is_empty() {
            return Err(invalid("snapshot", "width and height must be non-zero"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_owned(),
    }
}
