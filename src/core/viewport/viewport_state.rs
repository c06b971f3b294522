use crate::core::data::complex::Complex;
use crate::core::data::extent::Extent;
use crate::core::data::screen_point::{ScreenDelta, ScreenPoint};
use crate::core::viewport::errors::ViewportError;

pub const DEFAULT_CENTER: Complex = Complex::ORIGIN;
pub const DEFAULT_SIZE: Extent = Extent::square(4.0);

/// The axis-aligned window over the complex plane that is currently on screen.
///
/// Screen space spans `[-1, 1]` on both axes, so a screen half-extent of one
/// corresponds to half of [`size`](Self::size) in world space.
///
/// Invariant: `size.width > 0`, `size.height > 0`, and both the centre and the
/// size are finite. Every mutator checks the would-be state first and returns
/// an error without touching `self` when the invariant would break.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    center: Complex,
    size: Extent,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            size: DEFAULT_SIZE,
        }
    }
}

impl ViewportState {
    pub fn new(center: Complex, size: Extent) -> Result<Self, ViewportError> {
        check_center(center)?;
        check_size(size)?;

        Ok(Self { center, size })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> Extent {
        self.size
    }

    /// World-space position of the lower-left corner, uploaded as `llWindowPos`.
    #[must_use]
    pub fn lower_left_corner(&self) -> Complex {
        let half = self.size.half();
        Complex::new(self.center.real - half.width, self.center.imag - half.height)
    }

    #[must_use]
    pub fn upper_right_corner(&self) -> Complex {
        let half = self.size.half();
        Complex::new(self.center.real + half.width, self.center.imag + half.height)
    }

    /// Converts a displacement in screen space into a world-space displacement.
    ///
    /// Only depends on the size of the window, never on its centre, so it is
    /// what drag panning uses.
    #[must_use]
    pub fn screen_vec_to_world(&self, delta: ScreenDelta) -> Complex {
        let half = self.size.half();
        Complex::new(delta.dx * half.width, delta.dy * half.height)
    }

    /// Converts an absolute screen position into the world point under it.
    #[must_use]
    pub fn screen_point_to_world(&self, point: ScreenPoint) -> Complex {
        self.center + self.screen_vec_to_world(ScreenDelta::new(point.x, point.y))
    }

    /// Moves the window by `delta`. Panning is unbounded as long as the centre
    /// stays finite.
    pub fn translate(&mut self, delta: Complex) -> Result<(), ViewportError> {
        let center = self.center + delta;
        check_center(center)?;

        self.center = center;
        Ok(())
    }

    /// Scales the window by `factor` around `anchor`.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out. The anchor keeps its
    /// screen position: whatever screen point mapped to `anchor` before the
    /// call still maps to it afterwards.
    pub fn zoom(&mut self, anchor: Complex, factor: f64) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let size = self.size.scale(factor);
        let center = anchor + (self.center - anchor).scale(factor);
        check_size(size)?;
        check_center(center)?;

        self.size = size;
        self.center = center;
        Ok(())
    }

    pub fn set_center(&mut self, real: f64, imag: f64) -> Result<(), ViewportError> {
        let center = Complex::new(real, imag);
        check_center(center)?;

        self.center = center;
        Ok(())
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        let size = Extent::new(width, height);
        check_size(size)?;

        self.size = size;
        Ok(())
    }
}

fn check_size(size: Extent) -> Result<(), ViewportError> {
    if size.is_valid() {
        Ok(())
    } else {
        Err(ViewportError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}

fn check_center(center: Complex) -> Result<(), ViewportError> {
    if center.is_finite() {
        Ok(())
    } else {
        Err(ViewportError::NonFiniteCenter {
            real: center.real,
            imag: center.imag,
        })
    }
}
