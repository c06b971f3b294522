use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::framebuffer_size::FramebufferSize;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(size: FramebufferSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} buffer")]
    PixelOutsideBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("expected {expected} bytes for the buffer size, got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, first row at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: FramebufferSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: FramebufferSize) -> Self {
        Self {
            size,
            buffer: vec![0; buffer_size_for(size)],
        }
    }

    pub fn from_data(size: FramebufferSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = buffer_size_for(size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> FramebufferSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }

        Ok((y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
