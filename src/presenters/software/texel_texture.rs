use rayon::prelude::*;

use crate::core::data::colour::Texel;
use crate::core::resolution::RenderTarget;

/// CPU stand-in for the RGBA float storage texture. Row 0 is the bottom of
/// the window, as on the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct TexelTexture {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
}

impl TexelTexture {
    #[must_use]
    pub fn new(target: RenderTarget) -> Self {
        Self {
            width: target.h_res,
            height: target.v_res,
            texels: vec![Texel::BLACK; target.texel_count()],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Texel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.texels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rows of texels, bottom row first, for the parallel kernel.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, Texel> {
        let width = (self.width as usize).max(1);
        self.texels.par_chunks_exact_mut(width)
    }

    #[cfg(test)]
    fn texels_mut(&mut self) -> &mut [Texel] {
        &mut self.texels
    }

    /// Linear filtering with clamp-to-edge addressing. `u` runs left to right
    /// and `v` bottom to top, both over `[0, 1]` with texel centres at
    /// `(i + 0.5) / size`.
    #[must_use]
    pub fn sample_linear(&self, u: f32, v: f32) -> Texel {
        if self.is_empty() {
            return Texel::BLACK;
        }

        let (x0, x1, fx) = filter_taps(u, self.width);
        let (y0, y1, fy) = filter_taps(v, self.height);

        let bottom = self.texel_at(x0, y0).lerp(self.texel_at(x1, y0), fx);
        let top = self.texel_at(x0, y1).lerp(self.texel_at(x1, y1), fx);

        bottom.lerp(top, fy)
    }

    fn texel_at(&self, x: u32, y: u32) -> Texel {
        self.texels[y as usize * self.width as usize + x as usize]
    }
}

/// The two neighbouring texel indices along one axis and the weight of the
/// second one.
fn filter_taps(coord: f32, size: u32) -> (u32, u32, f32) {
    let last = size.saturating_sub(1) as f32;
    let position = (coord * size as f32 - 0.5).clamp(0.0, last);
    let lower = position.floor();

    let i0 = lower as u32;
    let i1 = (i0 + 1).min(size.saturating_sub(1));

    (i0, i1, position - lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(width: u32, height: u32) -> TexelTexture {
        TexelTexture::new(RenderTarget {
            h_res: width,
            v_res: height,
            supersample_factor: 1,
        })
    }

    fn grey(value: f32) -> Texel {
        Texel::opaque(value, value, value)
    }

    #[test]
    fn new_texture_is_black_and_sized_to_the_target() {
        let texture = texture(4, 3);

        assert_eq!((texture.width(), texture.height()), (4, 3));
        assert_eq!(texture.get(3, 2), Some(Texel::BLACK));
        assert_eq!(texture.get(4, 0), None);
    }

    #[test]
    fn sampling_a_texel_centre_returns_that_texel() {
        let mut texture = texture(2, 1);
        texture.texels_mut()[1] = grey(1.0);

        assert_eq!(texture.sample_linear(0.75, 0.5), grey(1.0));
        assert_eq!(texture.sample_linear(0.25, 0.5), Texel::BLACK);
    }

    #[test]
    fn sampling_between_centres_blends_linearly() {
        let mut texture = texture(2, 1);
        texture.texels_mut()[1] = grey(1.0);

        assert_eq!(texture.sample_linear(0.5, 0.5), grey(0.5));
    }

    #[test]
    fn edges_are_clamped() {
        let mut texture = texture(2, 2);
        texture.texels_mut()[0] = grey(0.25);

        assert_eq!(texture.sample_linear(0.0, 0.0), grey(0.25));
        assert_eq!(texture.sample_linear(-3.0, -3.0), grey(0.25));
    }

    #[test]
    fn v_runs_from_the_bottom_row() {
        let mut texture = texture(1, 2);
        texture.texels_mut()[1] = grey(1.0);

        assert_eq!(texture.sample_linear(0.5, 1.0), grey(1.0));
        assert_eq!(texture.sample_linear(0.5, 0.0), Texel::BLACK);
    }

    #[test]
    fn empty_texture_samples_black() {
        assert_eq!(texture(0, 0).sample_linear(0.5, 0.5), Texel::BLACK);
    }
}
