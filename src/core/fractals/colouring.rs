//! Iteration count to colour, shared by the software backend and mirrored in
//! `fractal.wgsl`.

use crate::core::data::colour::Texel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadingOptions {
    pub max_iterations: u32,
    pub blackout_interior: bool,
    pub use_log_scale: bool,
}

/// Colours one texel.
///
/// Points that never escaped are black when `blackout_interior` is set and use
/// the top of the gradient otherwise.
#[must_use]
pub fn shade(iterations: u32, options: ShadingOptions) -> Texel {
    let max = options.max_iterations.max(1);

    if iterations >= max {
        return if options.blackout_interior {
            Texel::BLACK
        } else {
            fire_gradient(1.0)
        };
    }

    let t = if options.use_log_scale {
        (iterations as f32).ln_1p() / (max as f32).ln_1p()
    } else {
        iterations as f32 / max as f32
    };

    fire_gradient(t)
}

/// Black to red to orange to yellow to white over `t` in `[0, 1]`.
#[must_use]
pub fn fire_gradient(t: f32) -> Texel {
    let t = t.clamp(0.0, 1.0);
    let orange_g = 165.0 / 255.0;

    if t < 0.25 {
        let local_t = t / 0.25;
        Texel::opaque(local_t, 0.0, 0.0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        Texel::opaque(1.0, local_t * orange_g, 0.0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        Texel::opaque(1.0, orange_g + local_t * (1.0 - orange_g), 0.0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        Texel::opaque(1.0, 1.0, local_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn options(blackout_interior: bool, use_log_scale: bool) -> ShadingOptions {
        ShadingOptions {
            max_iterations: 256,
            blackout_interior,
            use_log_scale,
        }
    }

    fn assert_texel_eq(actual: Texel, expected: Texel) {
        assert!(
            (actual.r - expected.r).abs() < EPSILON
                && (actual.g - expected.g).abs() < EPSILON
                && (actual.b - expected.b).abs() < EPSILON
                && (actual.a - expected.a).abs() < EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn gradient_endpoints() {
        assert_texel_eq(fire_gradient(0.0), Texel::BLACK);
        assert_texel_eq(fire_gradient(1.0), Texel::opaque(1.0, 1.0, 1.0));
    }

    #[test]
    fn gradient_is_continuous_at_band_edges() {
        for edge in [0.25f32, 0.5, 0.75] {
            let below = fire_gradient(edge - 1e-4);
            let at = fire_gradient(edge);

            assert!((below.r - at.r).abs() < 1e-2);
            assert!((below.g - at.g).abs() < 1e-2);
            assert!((below.b - at.b).abs() < 1e-2);
        }
    }

    #[test]
    fn interior_is_black_when_blacked_out() {
        assert_texel_eq(shade(256, options(true, false)), Texel::BLACK);
    }

    #[test]
    fn interior_uses_gradient_top_otherwise() {
        assert_texel_eq(shade(256, options(false, false)), fire_gradient(1.0));
    }

    #[test]
    fn zero_iterations_is_black_in_both_scales() {
        assert_texel_eq(shade(0, options(true, false)), Texel::BLACK);
        assert_texel_eq(shade(0, options(true, true)), Texel::BLACK);
    }

    #[test]
    fn log_scale_brightens_low_iteration_counts() {
        let linear = shade(8, options(true, false));
        let log = shade(8, options(true, true));

        assert!(log.r + log.g + log.b > linear.r + linear.g + linear.b);
    }

    #[test]
    fn alpha_is_always_opaque() {
        for iterations in [0, 10, 100, 255, 256] {
            assert_eq!(shade(iterations, options(false, true)).a, 1.0);
        }
    }
}
