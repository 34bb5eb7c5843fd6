pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod list;
pub mod menu;
pub mod refresh;
pub mod toast;
