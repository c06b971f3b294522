use crate::controllers::interactive::data::toggles::RenderToggles;
use crate::core::data::complex::Complex;
use crate::core::viewport::ViewportState;

/// Everything a frame is rendered from. Owned by the session and passed by
/// reference to the navigation controller and the orchestrator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerState {
    pub viewport: ViewportState,
    pub toggles: RenderToggles,
    /// Julia parameter; follows the cursor unless `toggles.cursor_locked`.
    pub seed: Complex,
}
