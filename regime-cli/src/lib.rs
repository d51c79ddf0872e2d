pub mod form;
pub mod input_file;
pub mod render;
