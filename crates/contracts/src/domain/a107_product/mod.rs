pub mod aggregate;
pub mod clone_draft;
pub mod stock_tools;
pub mod wizard;
