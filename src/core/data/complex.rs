use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point (or displacement) in world space, i.e. on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ORIGIN: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Complex square, the hot path of the escape-time kernels.
    #[must_use]
    pub fn squared(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        self.real += other.real;
        self.imag += other.imag;
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_components() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add_and_sub_are_inverse() {
        let a = Complex::new(1.5, -2.25);
        let b = Complex::new(-0.75, 4.0);

        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_add_assign() {
        let mut a = Complex::new(1.0, 2.0);
        a += Complex::new(0.5, -3.0);

        assert_eq!(a, Complex::new(1.5, -1.0));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Complex::new(1.0, -2.0), Complex::new(-1.0, 2.0));
    }

    #[test]
    fn test_mul_i_squared_is_minus_one() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i.squared(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 - i) = 3 - i + 6i - 2i² = 5 + 5i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, -1.0);
        assert_eq!(product, Complex::new(5.0, 5.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Complex::new(2.0, -4.0).scale(0.5), Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::ORIGIN.is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
