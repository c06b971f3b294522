mod fps_counter;
pub mod gui_app;
pub mod input_mapping;
