use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The two lists an invoice can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Invoices still being chased
    #[default]
    Active,
    /// Invoices written off as uncollectible
    BadDebt,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Active => "active",
            Collection::BadDebt => "bad_debt",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for the add-record action.
///
/// Missing fields deserialize to their empty value so that presence
/// validation, not JSON decoding, reports them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
#[serde(default)]
pub struct CreateInvoiceRequest {
    /// Customer name (required)
    pub customer_name: String,
    /// Invoice number (required, not unique)
    pub invoice_number: String,
    /// Invoice amount, must not be negative
    pub amount: Decimal,
    /// Invoice date as text; today when absent
    pub date: Option<String>,
    /// Free-form notes for administrators
    pub admin_notes: String,
    /// Free-form comments
    pub comments: String,
}

/// Request body for moving invoices to the bad-debt list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransferRequest {
    /// Every active invoice with this number is moved
    pub invoice_number: String,
}

/// Invoice record as displayed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InvoiceDto {
    pub customer_name: String,
    pub invoice_number: String,
    pub amount: Decimal,
    /// Null when the submitted date could not be parsed
    pub date: Option<NaiveDate>,
    /// Days since the invoice date, null when the date is missing
    pub days: Option<i64>,
    /// Sum of amounts for this customer within the same collection
    pub total_amount: Decimal,
    pub admin_notes: String,
    pub comments: String,
    /// Row should be highlighted as past due
    pub overdue: bool,
    pub amount_display: String,
    pub total_amount_display: String,
}

/// Result of the add-record action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddInvoiceResult {
    pub record: InvoiceDto,
    pub active_count: usize,
}

/// Result of a transfer to bad debt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransferResult {
    pub invoice_number: String,
    /// Records as they look in the bad-debt list after the move
    pub moved: Vec<InvoiceDto>,
    pub active_count: usize,
    pub bad_debt_count: usize,
}
