pub mod clone;
pub mod list;
