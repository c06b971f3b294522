use log::debug;

use crate::config::ViewConfig;
use crate::controllers::interactive::data::ExplorerState;
use crate::controllers::interactive::events::{ButtonState, NavigationKey, PointerButton};
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::viewport::{ViewportError, ViewportState};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationSettings {
    /// Size multiplier for one forward scroll notch.
    pub zoom_step: f64,
    pub invert_scroll: bool,
    /// World height of the window after a reset.
    pub reset_height: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

impl From<&ViewConfig> for NavigationSettings {
    fn from(config: &ViewConfig) -> Self {
        Self {
            zoom_step: config.zoom_step,
            invert_scroll: config.invert_scroll,
            reset_height: config.reset_height,
        }
    }
}

/// What the session has to do after a key press beyond the state changes the
/// controller already made.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    SupersamplingChanged,
    QuitRequested,
}

/// Turns pointer, scroll and key input into viewport and toggle changes.
///
/// The only state carried between frames is the cursor position seen at the
/// previous frame and whether the primary button is down.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    settings: NavigationSettings,
    last_cursor: ScreenPoint,
    primary_held: bool,
}

impl NavigationController {
    #[must_use]
    pub fn new(settings: NavigationSettings, initial_cursor: ScreenPoint) -> Self {
        Self {
            settings,
            last_cursor: initial_cursor,
            primary_held: false,
        }
    }

    /// Runs the per-frame part of navigation with this frame's cursor sample:
    /// pan while the primary button is held, then move the seed to the world
    /// point under the (post-pan) cursor unless the cursor is locked.
    pub fn begin_frame(&mut self, cursor: ScreenPoint, state: &mut ExplorerState) {
        if self.primary_held {
            let delta = cursor - self.last_cursor;

            if !delta.is_zero() {
                let world_delta = state.viewport.screen_vec_to_world(-delta);
                log_rejection("pan", state.viewport.translate(world_delta));
            }
        }

        if !state.toggles.cursor_locked {
            state.seed = state.viewport.screen_point_to_world(cursor);
        }

        self.last_cursor = cursor;
    }

    pub fn handle_button(
        &mut self,
        button: PointerButton,
        button_state: ButtonState,
        state: &mut ExplorerState,
    ) {
        match (button, button_state) {
            (PointerButton::Primary, ButtonState::Pressed) => self.primary_held = true,
            (PointerButton::Primary, ButtonState::Released) => self.primary_held = false,
            (PointerButton::Secondary, ButtonState::Pressed) => {
                state.toggles.log_scale = !state.toggles.log_scale;
                debug!("log scale: {}", state.toggles.log_scale);
            }
            (PointerButton::Secondary, ButtonState::Released) => {}
        }
    }

    /// Zooms around the world point under `cursor`.
    pub fn handle_scroll(&self, dy: f64, cursor: ScreenPoint, viewport: &mut ViewportState) {
        if dy == 0.0 {
            return;
        }

        let anchor = viewport.screen_point_to_world(cursor);
        log_rejection("zoom", viewport.zoom(anchor, self.scroll_factor(dy)));
    }

    /// Size multiplier for a vertical scroll of `dy` notches. Constant per
    /// notch, so the zoom rate does not depend on the current zoom level.
    #[must_use]
    pub fn scroll_factor(&self, dy: f64) -> f64 {
        let dy = if self.settings.invert_scroll { -dy } else { dy };
        self.settings.zoom_step.powf(dy)
    }

    pub fn handle_key(
        &mut self,
        key: NavigationKey,
        state: &mut ExplorerState,
        framebuffer: FramebufferSize,
    ) -> KeyOutcome {
        let toggles = &mut state.toggles;

        match key {
            NavigationKey::Quit => return KeyOutcome::QuitRequested,
            NavigationKey::ToggleFractalMode => {
                toggles.toggle_fractal();
                debug!("fractal mode: {}", toggles.fractal);
            }
            NavigationKey::ToggleSupersampling => {
                toggles.supersampling = !toggles.supersampling;
                debug!("supersampling: {}", toggles.supersampling);
                return KeyOutcome::SupersamplingChanged;
            }
            NavigationKey::ToggleCursorLock => {
                toggles.cursor_locked = !toggles.cursor_locked;
                debug!("cursor locked: {}", toggles.cursor_locked);
            }
            NavigationKey::ToggleAspectLock => {
                toggles.aspect_unlocked = !toggles.aspect_unlocked;
                debug!("aspect unlocked: {}", toggles.aspect_unlocked);
            }
            NavigationKey::ToggleInteriorBlack => {
                toggles.interior_black = !toggles.interior_black;
                debug!("interior black: {}", toggles.interior_black);
            }
            NavigationKey::ResetView => {
                let aspect_unlocked = toggles.aspect_unlocked;
                self.reset(&mut state.viewport, aspect_unlocked, framebuffer);
            }
        }

        KeyOutcome::Handled
    }

    /// Centres the window on the origin with the configured height. The width
    /// equals the height, or follows the framebuffer aspect ratio when the
    /// aspect is unlocked.
    pub fn reset(
        &self,
        viewport: &mut ViewportState,
        aspect_unlocked: bool,
        framebuffer: FramebufferSize,
    ) {
        let height = self.settings.reset_height;
        let width = match framebuffer.aspect_ratio() {
            Some(aspect) if aspect_unlocked => height * aspect,
            _ => height,
        };

        log_rejection("reset size", viewport.set_size(width, height));
        log_rejection("reset centre", viewport.set_center(0.0, 0.0));
        debug!(
            "view reset to {}x{} around the origin",
            viewport.size().width,
            viewport.size().height
        );
    }
}

fn log_rejection(operation: &str, result: Result<(), ViewportError>) {
    if let Err(err) = result {
        debug!("{operation} ignored: {err}");
    }
}
