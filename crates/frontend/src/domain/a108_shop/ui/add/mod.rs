mod view;

pub use view::ShopAdd;
