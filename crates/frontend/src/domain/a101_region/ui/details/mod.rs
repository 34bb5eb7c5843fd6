//! Форма региона (модальное окно создания / редактирования)
//!
//! - view_model.rs: привязка `RegionForm` к общему `FormViewModel`
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::RegionDetails;
