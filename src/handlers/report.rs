use crate::helpers::converters::{report_to_dto, warning_messages};
use crate::helpers::responses::{compute_error, ApiError};
use crate::schemas::AppState;
use crate::session::SessionId;
use axum::{extract::State, response::Json};
use common::{ApiResponse, CustomerReportDto, ErrorResponse};
use tracing::{debug, instrument};

/// Per-customer report over the active invoices
#[utoipa::path(
    get,
    path = "/api/v1/report",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 200, description = "Report computed successfully", body = ApiResponse<CustomerReportDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "report"
)]
#[instrument(skip(state, session), fields(session = %session.as_str()))]
pub async fn get_report(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<ApiResponse<CustomerReportDto>>, ApiError> {
    let store = state.sessions.store(session.as_str()).await;
    let mut store = store.lock().await;
    let warnings = store.refresh(compute::today()).map_err(compute_error)?;
    let report = store.report().map_err(compute_error)?;
    debug!("Report covers {} customer(s)", report.customers.len());
    let dto = report_to_dto(&report, &state.settings).map_err(compute_error)?;

    Ok(Json(
        ApiResponse::ok(dto, "Report computed successfully")
            .with_warnings(warning_messages(&warnings)),
    ))
}
