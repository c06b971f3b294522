use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::ExplorerSession;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::viewport::ViewportError;
use crate::presenters::software::SoftwareBackend;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid initial view: {0}")]
    Viewport(#[from] ViewportError),
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write snapshot to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders a single frame without a window, using the CPU backend, with the
/// seed locked to the configured snapshot seed.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn render(&self, config: &ExplorerConfig) -> Result<PixelBuffer, SnapshotError> {
        let framebuffer = config.snapshot.framebuffer();
        let mut session = ExplorerSession::new(config, framebuffer)?;
        let mut backend = SoftwareBackend::new(session.render_target(), framebuffer);

        session.sync_render_target(&mut backend);
        session.lock_seed(config.snapshot.seed());

        let start = Instant::now();
        session.tick(&mut backend);

        let target = session.render_target();
        info!(
            "rendered {} snapshot at {}x{} (compute {}x{}) in {:?}",
            session.toggles().fractal,
            framebuffer.width,
            framebuffer.height,
            target.h_res,
            target.v_res,
            start.elapsed()
        );

        Ok(backend.into_frame())
    }

    /// Renders and writes the snapshot to `config.snapshot.output_path`,
    /// creating missing parent directories.
    pub fn write(&self, config: &ExplorerConfig) -> Result<PathBuf, SnapshotError> {
        let frame = self.render(config)?;
        let path = config.snapshot.output_path.clone();

        create_parent_dir(&path)?;
        self.presenter
            .present(&frame, &path)
            .map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;

        info!("saved snapshot to {}", path.display());
        Ok(path)
    }
}

fn create_parent_dir(path: &Path) -> Result<(), SnapshotError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| SnapshotError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
