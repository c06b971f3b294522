/// 8-bit RGB colour, the unit stored in a [`PixelBuffer`](super::pixel_buffer::PixelBuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear floating point RGBA value, the unit written by the compute kernels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Texel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Texel {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
        }
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // Clamped to [0, 255] before the cast.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_convert_to_extremes() {
        assert_eq!(Texel::BLACK.to_colour(), Colour { r: 0, g: 0, b: 0 });
        assert_eq!(
            Texel::opaque(1.0, 1.0, 1.0).to_colour(),
            Colour {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let colour = Texel::opaque(-0.5, 2.0, 0.5).to_colour();

        assert_eq!(colour, Colour { r: 0, g: 255, b: 128 });
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Texel::BLACK.lerp(Texel::opaque(1.0, 0.5, 0.0), 0.5);

        assert_eq!(mid, Texel::opaque(0.5, 0.25, 0.0));
    }
}
