//! winit input to session events.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::interactive::{ButtonState, NavigationKey, PointerButton};

/// Printed on startup and shown in the overlay.
pub const CONTROLS_HELP: &str = "\
Controls:
  Left drag     pan
  Mouse wheel   zoom at the cursor
  Right click   toggle linear / log colouring
  M             toggle Julia / Mandelbrot
  S             toggle supersampling
  P             lock / unlock the seed at the cursor
  A             lock / unlock the aspect ratio used by reset
  I             toggle black interior
  R             reset the view
  H             show / hide this overlay
  Esc           quit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyBinding {
    Navigation(NavigationKey),
    ToggleOverlay,
}

#[must_use]
pub fn key_binding(code: KeyCode) -> Option<KeyBinding> {
    let key = match code {
        KeyCode::Escape => NavigationKey::Quit,
        KeyCode::KeyM => NavigationKey::ToggleFractalMode,
        KeyCode::KeyS => NavigationKey::ToggleSupersampling,
        KeyCode::KeyP => NavigationKey::ToggleCursorLock,
        KeyCode::KeyA => NavigationKey::ToggleAspectLock,
        KeyCode::KeyI => NavigationKey::ToggleInteriorBlack,
        KeyCode::KeyR => NavigationKey::ResetView,
        KeyCode::KeyH => return Some(KeyBinding::ToggleOverlay),
        _ => return None,
    };

    Some(KeyBinding::Navigation(key))
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

#[must_use]
pub fn button_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Vertical scroll in notches; positive is forward (away from the user).
#[must_use]
pub fn scroll_lines(delta: MouseScrollDelta, pixels_per_line: f64) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / pixels_per_line,
    }
}
