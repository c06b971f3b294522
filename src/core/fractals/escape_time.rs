//! CPU reference of the escape-time kernels in `fractal.wgsl`.

use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// `|z|^2` above this means the orbit has escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z = z^2 + c` steps taken before `z` escapes, or `max_iterations`
/// when it never does.
#[must_use]
pub fn escape_iterations(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let iterations = (0..max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z.squared() + c)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

/// Runs the kernel selected by `kind` for one world point.
///
/// The Julia kernel starts at the point and adds the seed; the Mandelbrot
/// kernel starts at zero and adds the point.
#[must_use]
pub fn iterate_point(kind: FractalKinds, point: Complex, seed: Complex, max_iterations: u32) -> u32 {
    match kind {
        FractalKinds::Julia => escape_iterations(point, seed, max_iterations),
        FractalKinds::Mandelbrot => escape_iterations(Complex::ORIGIN, point, max_iterations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_outside_radius_escapes_immediately() {
        assert_eq!(escape_iterations(Complex::new(3.0, 0.0), Complex::ORIGIN, 100), 0);
    }

    #[test]
    fn origin_never_escapes_in_mandelbrot() {
        assert_eq!(
            iterate_point(FractalKinds::Mandelbrot, Complex::ORIGIN, Complex::ORIGIN, 50),
            50
        );
    }

    #[test]
    fn mandelbrot_point_two_escapes_after_two_steps() {
        // z: 0 -> 2 -> 6, |6|^2 > 4 at the third check
        assert_eq!(
            iterate_point(FractalKinds::Mandelbrot, Complex::new(2.0, 0.0), Complex::ORIGIN, 50),
            2
        );
    }

    #[test]
    fn julia_with_zero_seed_is_the_unit_disk() {
        let inside = iterate_point(FractalKinds::Julia, Complex::new(0.5, 0.5), Complex::ORIGIN, 64);
        let outside = iterate_point(FractalKinds::Julia, Complex::new(1.1, 0.0), Complex::ORIGIN, 64);

        assert_eq!(inside, 64);
        assert!(outside < 64);
    }

    #[test]
    fn julia_ignores_nothing_but_the_seed() {
        let point = Complex::new(0.1, 0.2);
        let seed = Complex::new(-0.7, 0.27);

        assert_eq!(
            iterate_point(FractalKinds::Julia, point, seed, 256),
            escape_iterations(point, seed, 256)
        );
    }

    #[test]
    fn zero_max_iterations_returns_zero() {
        assert_eq!(escape_iterations(Complex::ORIGIN, Complex::ORIGIN, 0), 0);
    }
}
