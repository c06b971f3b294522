//! Interactive controller for real-time fractal exploration.
//!
//! This module is the application layer between a host event loop and the
//! GPU: it turns input into viewport changes and issues one compute and
//! display pass per frame.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: pointer, scroll and key events passed to [`ExplorerSession`]
//! - **Output**: the [`ports`] traits implemented by a rendering backend
//! - **Core**: viewport math and resolution policy from `core/`

pub mod data;
pub mod events;
pub mod navigation;
pub mod orchestrator;
pub mod ports;
mod session;

pub use data::{ExplorerState, RenderToggles};
pub use events::{ButtonState, NavigationKey, PointerButton};
pub use navigation::{KeyOutcome, NavigationController, NavigationSettings};
pub use orchestrator::RenderOrchestrator;
pub use session::ExplorerSession;
