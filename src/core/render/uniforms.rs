use crate::core::data::complex::Complex;
use crate::core::data::extent::Extent;
use crate::core::fractals::colouring::ShadingOptions;
use crate::core::resolution::RenderTarget;

/// Values handed to the compute kernel for one frame.
///
/// Names follow the kernel uniforms: `resolution`, `seed`, `blackoutInterior`,
/// `useLogScale`, `llWindowPos`, `windowSize`, plus `maxIterations`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub resolution: (u32, u32),
    /// Present only for the Julia kernel.
    pub seed: Option<Complex>,
    pub blackout_interior: bool,
    pub use_log_scale: bool,
    pub ll_window_pos: Complex,
    pub window_size: Extent,
    pub max_iterations: u32,
}

impl FrameUniforms {
    #[must_use]
    pub fn shading(&self) -> ShadingOptions {
        ShadingOptions {
            max_iterations: self.max_iterations,
            blackout_interior: self.blackout_interior,
            use_log_scale: self.use_log_scale,
        }
    }

    /// World point at the centre of texel `(x, y)`; row 0 is the bottom of the
    /// window.
    #[must_use]
    pub fn texel_to_world(&self, x: u32, y: u32) -> Complex {
        let (h_res, v_res) = self.resolution;
        let fx = (f64::from(x) + 0.5) / f64::from(h_res.max(1));
        let fy = (f64::from(y) + 0.5) / f64::from(v_res.max(1));

        Complex::new(
            self.ll_window_pos.real + fx * self.window_size.width,
            self.ll_window_pos.imag + fy * self.window_size.height,
        )
    }

    #[must_use]
    pub fn matches_target(&self, target: &RenderTarget) -> bool {
        self.resolution == (target.h_res, target.v_res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms(resolution: (u32, u32)) -> FrameUniforms {
        FrameUniforms {
            resolution,
            seed: None,
            blackout_interior: true,
            use_log_scale: false,
            ll_window_pos: Complex::new(-2.0, -2.0),
            window_size: Extent::square(4.0),
            max_iterations: 256,
        }
    }

    #[test]
    fn texel_centres_span_the_window() {
        let uniforms = uniforms((4, 4));

        assert_eq!(uniforms.texel_to_world(0, 0), Complex::new(-1.5, -1.5));
        assert_eq!(uniforms.texel_to_world(3, 3), Complex::new(1.5, 1.5));
    }

    #[test]
    fn row_zero_is_the_bottom_of_the_window() {
        let uniforms = uniforms((2, 2));

        assert!(uniforms.texel_to_world(0, 0).imag < uniforms.texel_to_world(0, 1).imag);
    }

    #[test]
    fn matches_target_compares_resolution() {
        let uniforms = uniforms((8, 6));
        let target = RenderTarget {
            h_res: 8,
            v_res: 6,
            supersample_factor: 2,
        };

        assert!(uniforms.matches_target(&target));
    }
}
