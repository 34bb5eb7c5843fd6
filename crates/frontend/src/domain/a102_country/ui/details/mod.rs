//! Форма страны: переводы, код, регион, изображение

mod view;
mod view_model;

pub use view::CountryDetails;
