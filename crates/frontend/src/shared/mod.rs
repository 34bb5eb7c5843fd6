pub mod api_utils;
pub mod auto_refresh;
pub mod components;
pub mod config;
pub mod form_vm;
pub mod http;
pub mod i18n;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod query_state;
pub mod rest;
pub mod select_options;
pub mod storage;
