pub mod input;

pub use input::{ButtonState, NavigationKey, PointerButton};
