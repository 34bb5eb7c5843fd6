//! Order details page
//!
//! - model.rs: API functions (fetch, tracking update)
//! - view.rs: Leptos component

mod model;
mod view;

pub use view::OrderDetails;
