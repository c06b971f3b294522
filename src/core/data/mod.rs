pub mod colour;
pub mod complex;
pub mod extent;
pub mod framebuffer_size;
pub mod pixel_buffer;
pub mod screen_point;
