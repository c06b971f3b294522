use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes frames as binary PPM (`P6`) images.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn write_to(&self, buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
        let size = buffer.size();

        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", size.width, size.height)?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;

        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let file = File::create(filepath)?;
        self.write_to(buffer, BufWriter::new(file))
    }
}
