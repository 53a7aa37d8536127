mod add_record_form;
pub mod layout;
mod navbar;
mod sidebar;
