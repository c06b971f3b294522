//! Normalized device coordinates.
//!
//! Screen space spans `[-1, 1)` on both axes with the origin at the centre of
//! the window, positive x to the right and positive y upwards.

use std::ops::{Neg, Sub};

use crate::core::data::framebuffer_size::FramebufferSize;

/// An absolute position in normalized screen space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// A displacement in normalized screen space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenDelta {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenPoint {
    pub const CENTRE: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts a window position in physical pixels (origin top-left, y down)
    /// into normalized screen coordinates.
    #[must_use]
    pub fn from_window_position(x_px: f64, y_px: f64, framebuffer: FramebufferSize) -> Self {
        let width = f64::from(framebuffer.width.max(1));
        let height = f64::from(framebuffer.height.max(1));

        Self {
            x: x_px * 2.0 / width - 1.0,
            y: -y_px * 2.0 / height + 1.0,
        }
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenDelta;

    fn sub(self, other: Self) -> ScreenDelta {
        ScreenDelta {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

impl ScreenDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Neg for ScreenDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}
