use serde::Deserialize;

/// Which compute kernel renders the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKinds {
    Mandelbrot,
    #[default]
    Julia,
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// The other kernel; the fractal-mode key flips between the two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Mandelbrot => Self::Julia,
            Self::Julia => Self::Mandelbrot,
        }
    }

    /// Only the Julia kernel takes the cursor seed.
    #[must_use]
    pub const fn uses_seed(self) -> bool {
        matches!(self, Self::Julia)
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julia_is_the_default() {
        assert_eq!(FractalKinds::default(), FractalKinds::Julia);
    }

    #[test]
    fn toggled_twice_is_identity() {
        for kind in [FractalKinds::Julia, FractalKinds::Mandelbrot] {
            assert_ne!(kind.toggled(), kind);
            assert_eq!(kind.toggled().toggled(), kind);
        }
    }

    #[test]
    fn only_julia_uses_seed() {
        assert!(FractalKinds::Julia.uses_seed());
        assert!(!FractalKinds::Mandelbrot.uses_seed());
    }

    #[test]
    fn deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: FractalKinds,
        }

        let wrapper: Wrapper = toml::from_str("kind = \"mandelbrot\"").unwrap();
        assert_eq!(wrapper.kind, FractalKinds::Mandelbrot);
    }
}
