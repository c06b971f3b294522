use crate::config::ToggleConfig;
use crate::core::fractals::FractalKinds;

/// Independent render and navigation flags. Each one is flipped by its own
/// input event; none of them affect each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderToggles {
    pub interior_black: bool,
    pub log_scale: bool,
    pub supersampling: bool,
    /// Freezes the Julia seed instead of tracking the cursor.
    pub cursor_locked: bool,
    /// Read only when the view is reset: the reset window then follows the
    /// framebuffer aspect ratio instead of being square.
    pub aspect_unlocked: bool,
    pub fractal: FractalKinds,
}

impl Default for RenderToggles {
    fn default() -> Self {
        Self::from(&ToggleConfig::default())
    }
}

impl From<&ToggleConfig> for RenderToggles {
    fn from(config: &ToggleConfig) -> Self {
        Self {
            interior_black: config.interior_black,
            log_scale: config.log_scale,
            supersampling: config.supersampling,
            cursor_locked: config.cursor_locked,
            aspect_unlocked: config.aspect_unlocked,
            fractal: config.fractal,
        }
    }
}

impl RenderToggles {
    pub fn toggle_fractal(&mut self) {
        self.fractal = self.fractal.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_config_defaults() {
        let toggles = RenderToggles::default();

        assert!(toggles.interior_black);
        assert!(!toggles.log_scale);
        assert!(toggles.supersampling);
        assert!(!toggles.cursor_locked);
        assert!(toggles.aspect_unlocked);
        assert_eq!(toggles.fractal, FractalKinds::Julia);
    }

    #[test]
    fn toggle_fractal_flips_between_the_two_kernels() {
        let mut toggles = RenderToggles::default();

        toggles.toggle_fractal();
        assert_eq!(toggles.fractal, FractalKinds::Mandelbrot);

        toggles.toggle_fractal();
        assert_eq!(toggles.fractal, FractalKinds::Julia);
    }
}
