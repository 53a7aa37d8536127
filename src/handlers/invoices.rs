use crate::helpers::converters::{
    invoice_to_dto, invoices_to_dtos, request_to_new_invoice, warning_messages,
};
use crate::helpers::responses::{bad_request, compute_error, invalid_request, ApiError};
use crate::schemas::{AppState, InvoicesQuery};
use crate::session::SessionId;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use common::{
    AddInvoiceResult, ApiResponse, Collection, CreateInvoiceRequest, ErrorResponse, InvoiceDto,
    TransferRequest, TransferResult,
};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

/// Add an invoice to the active list
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    request_body = CreateInvoiceRequest,
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 201, description = "Record added successfully", body = ApiResponse<AddInvoiceResult>),
        (status = 400, description = "Missing required field or negative amount", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "invoices"
)]
#[instrument(skip(state, session, request), fields(session = %session.as_str()))]
pub async fn create_invoice(
    State(state): State<AppState>,
    session: SessionId,
    request: Result<Json<CreateInvoiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AddInvoiceResult>>), ApiError> {
    let Json(request) = request.map_err(|e| invalid_request(e.status(), e.body_text()))?;
    debug!(
        "Adding invoice {:?} for customer {:?}",
        request.invoice_number, request.customer_name
    );

    if request.amount < Decimal::ZERO {
        warn!("Rejected negative amount {}", request.amount);
        return Err(bad_request("INVALID_AMOUNT", "Amount must not be negative."));
    }

    let store = state.sessions.store(session.as_str()).await;
    let mut store = store.lock().await;
    let outcome = store
        .add(request_to_new_invoice(request), compute::today())
        .map_err(compute_error)?;

    let result = AddInvoiceResult {
        record: invoice_to_dto(&outcome.record, &state.settings),
        active_count: store.len(Collection::Active),
    };
    info!(
        "Invoice {} added, {} active record(s)",
        result.record.invoice_number, result.active_count
    );

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(result, "Record added successfully!")
                .with_warnings(warning_messages(&outcome.warnings)),
        ),
    ))
}

/// List the records of one collection
#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    params(
        InvoicesQuery,
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 200, description = "Records retrieved successfully", body = ApiResponse<Vec<InvoiceDto>>),
        (status = 400, description = "Unknown collection", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "invoices"
)]
#[instrument(skip(state, session), fields(session = %session.as_str()))]
pub async fn get_invoices(
    State(state): State<AppState>,
    session: SessionId,
    query: Result<Query<InvoicesQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<InvoiceDto>>>, ApiError> {
    let Query(query) = query.map_err(|e| invalid_request(e.status(), e.body_text()))?;
    list_collection(&state, &session, query.collection.unwrap_or_default()).await
}

/// List the bad-debt records
#[utoipa::path(
    get,
    path = "/api/v1/bad-debt",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 200, description = "Bad-debt records retrieved successfully", body = ApiResponse<Vec<InvoiceDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "invoices"
)]
#[instrument(skip(state, session), fields(session = %session.as_str()))]
pub async fn get_bad_debt(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<ApiResponse<Vec<InvoiceDto>>>, ApiError> {
    list_collection(&state, &session, Collection::BadDebt).await
}

async fn list_collection(
    state: &AppState,
    session: &SessionId,
    collection: Collection,
) -> Result<Json<ApiResponse<Vec<InvoiceDto>>>, ApiError> {
    let store = state.sessions.store(session.as_str()).await;
    let mut store = store.lock().await;
    let warnings = store.refresh(compute::today()).map_err(compute_error)?;

    let records = invoices_to_dtos(store.all(collection), &state.settings);
    debug!("Listing {} record(s) from {}", records.len(), collection);

    Ok(Json(
        ApiResponse::ok(records, format!("{} records retrieved successfully", collection))
            .with_warnings(warning_messages(&warnings)),
    ))
}

/// Move every active record with an invoice number to bad debt
#[utoipa::path(
    post,
    path = "/api/v1/invoices/transfer",
    request_body = TransferRequest,
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 200, description = "Records transferred to bad debt", body = ApiResponse<TransferResult>),
        (status = 400, description = "Blank invoice number", body = ErrorResponse),
        (status = 404, description = "No active invoice with this number", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "invoices"
)]
#[instrument(skip(state, session), fields(session = %session.as_str()))]
pub async fn transfer_invoice(
    State(state): State<AppState>,
    session: SessionId,
    request: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TransferResult>>, ApiError> {
    let Json(request) = request.map_err(|e| invalid_request(e.status(), e.body_text()))?;
    if request.invoice_number.trim().is_empty() {
        warn!("Rejected transfer without invoice number");
        return Err(bad_request("VALIDATION_ERROR", "Invoice Number is required."));
    }

    let store = state.sessions.store(session.as_str()).await;
    let mut store = store.lock().await;
    let outcome = store
        .transfer(&request.invoice_number, compute::today())
        .map_err(compute_error)?;

    let message = format!(
        "Record with Invoice Number {} transferred to Bad Debt.",
        request.invoice_number
    );
    let result = TransferResult {
        invoice_number: request.invoice_number,
        moved: invoices_to_dtos(&outcome.moved, &state.settings),
        active_count: store.len(Collection::Active),
        bad_debt_count: store.len(Collection::BadDebt),
    };
    info!("{}", message);

    Ok(Json(
        ApiResponse::ok(result, message).with_warnings(warning_messages(&outcome.warnings)),
    ))
}
