pub mod bad_debt;
mod invoice_table;
pub mod layout;
pub mod records;
pub mod reminders;
pub mod report;
