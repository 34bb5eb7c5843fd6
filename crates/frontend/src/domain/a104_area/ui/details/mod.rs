//! Форма района: регион -> страна -> город.
//! Смена родителя сбрасывает выбор ниже по цепочке.

mod view;
mod view_model;

pub use view::AreaDetails;
