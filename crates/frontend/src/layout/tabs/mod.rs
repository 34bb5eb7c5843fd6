//! Вкладки центральной зоны
//!
//! - `keys` - ключи вкладок и их разбор
//! - `page` - обёртка контента вкладки
//! - `registry` - маппинг ключа во View
//! - `tab_labels` - заголовки

pub mod keys;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use keys::{
    discount_tab_key, order_tab_key, product_clone_tab_key, TabRoute, POS_TAB, SHOP_ADD_TAB,
};
pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
