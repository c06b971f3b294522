pub mod colouring;
pub mod escape_time;
pub mod fractal_kinds;

pub use fractal_kinds::FractalKinds;
