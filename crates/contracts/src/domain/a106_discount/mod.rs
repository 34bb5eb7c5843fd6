pub mod aggregate;
pub mod color_name;
