//! Discount editor page (tab `a106_discount/<id>` or `a106_discount/new`)
//!
//! - view_model.rs: load, validation, save
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::DiscountDetails;
