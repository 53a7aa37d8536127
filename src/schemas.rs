use common::{
    AddInvoiceResult, ApiResponse, Collection, CreateInvoiceRequest, CustomerReportDto,
    CustomerSummaryDto, ErrorResponse, InvoiceDto, ReminderDto, SessionEnded, TransferRequest,
    TransferResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::config::Settings;
use crate::session::SessionRegistry;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Per-session invoice stores
    pub sessions: SessionRegistry,
    /// Effective configuration
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(sessions: SessionRegistry, settings: Settings) -> Self {
        Self {
            sessions,
            settings: Arc::new(settings),
        }
    }
}

/// Query parameters for the invoice listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct InvoicesQuery {
    /// Collection to list, `active` when absent
    pub collection: Option<Collection>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of live sessions
    pub sessions: u64,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::invoices::create_invoice,
        crate::handlers::invoices::get_invoices,
        crate::handlers::invoices::get_bad_debt,
        crate::handlers::invoices::transfer_invoice,
        crate::handlers::report::get_report,
        crate::handlers::reminders::get_reminders,
        crate::handlers::session::end_session,
    ),
    components(
        schemas(
            ApiResponse<AddInvoiceResult>,
            ApiResponse<Vec<InvoiceDto>>,
            ApiResponse<TransferResult>,
            ApiResponse<CustomerReportDto>,
            ApiResponse<ReminderDto>,
            ApiResponse<SessionEnded>,
            ErrorResponse,
            HealthResponse,
            InvoicesQuery,
            Collection,
            CreateInvoiceRequest,
            TransferRequest,
            InvoiceDto,
            AddInvoiceResult,
            TransferResult,
            CustomerReportDto,
            CustomerSummaryDto,
            ReminderDto,
            SessionEnded,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "invoices", description = "Active and bad-debt invoice records"),
        (name = "report", description = "Per-customer report and reminders"),
        (name = "session", description = "Session lifecycle"),
    ),
    info(
        title = "DebtDesk API",
        description = "Invoice and bad-debt tracking dashboard API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
