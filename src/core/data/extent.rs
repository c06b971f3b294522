/// Width and height of a world-space window.
///
/// Carries no invariant of its own; [`ViewportState`](crate::core::viewport::ViewportState)
/// is the type that refuses non-positive extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    #[must_use]
    pub fn half(self) -> Self {
        self.scale(0.5)
    }
}
