//! Форма города: регион -> страна

mod view;
mod view_model;

pub use view::CityDetails;
