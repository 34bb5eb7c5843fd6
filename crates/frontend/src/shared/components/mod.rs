pub mod date_input;
pub mod infinite_select;
pub mod pagination_controls;
pub mod row_actions;
pub mod toaster;
pub mod translation_inputs;
