pub mod entry_form;
pub mod menu_page;
