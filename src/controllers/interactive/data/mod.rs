pub mod explorer_state;
pub mod toggles;

pub use explorer_state::ExplorerState;
pub use toggles::RenderToggles;
