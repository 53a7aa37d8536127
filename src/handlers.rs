pub mod health;
pub mod invoices;
pub mod reminders;
pub mod report;
pub mod session;
