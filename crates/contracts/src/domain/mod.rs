pub mod common;

pub mod a101_region;
pub mod a102_country;
pub mod a103_city;
pub mod a104_area;
pub mod a105_order;
pub mod a106_discount;
pub mod a107_product;
pub mod a108_shop;
pub mod a109_chat;
pub mod a110_pos;
