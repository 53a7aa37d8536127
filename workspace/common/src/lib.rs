//! Common transport-layer types shared between backend and frontend.
//! These structs are the request/response payloads of the HTTP API, so the
//! frontend can deserialize responses without duplicating shapes.

mod invoice;
mod money;
mod report;

pub use invoice::{
    AddInvoiceResult, Collection, CreateInvoiceRequest, InvoiceDto, TransferRequest,
    TransferResult,
};
pub use money::{format_amount, DEFAULT_CURRENCY};
pub use report::{CustomerReportDto, CustomerSummaryDto, ReminderDto, SessionEnded};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
    /// Non-fatal warnings raised while handling the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response without warnings.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}
