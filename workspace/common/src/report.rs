use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One customer line of the active-invoice report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CustomerSummaryDto {
    pub customer_name: String,
    pub invoice_count: u64,
    pub total_amount: Decimal,
    pub total_amount_display: String,
}

/// Per-customer report over the active collection, sorted by customer name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CustomerReportDto {
    pub customers: Vec<CustomerSummaryDto>,
    pub invoice_count: u64,
    pub grand_total: Decimal,
    pub grand_total_display: String,
    /// ISO code used for the display strings
    pub currency: String,
}

/// Static reminder notice.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReminderDto {
    pub message: String,
}

/// Returned when a session is ended explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionEnded {
    pub session_id: String,
    /// Records held by the session when it was dropped (both collections)
    pub discarded_records: usize,
}
