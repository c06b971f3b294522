//! Input events as the session sees them, independent of the windowing
//! library that produced them.

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Drag to pan.
    Primary,
    /// Click to switch between linear and log colouring.
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    Quit,
    ToggleFractalMode,
    ToggleSupersampling,
    ToggleCursorLock,
    ToggleAspectLock,
    ToggleInteriorBlack,
    ResetView,
}
