use axum::{http::StatusCode, response::Json};
use common::ErrorResponse;
use compute::ComputeError;
use tracing::{error, warn};

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn bad_request(code: &str, message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(code, message)))
}

/// Error envelope for a body or query string axum could not extract.
///
/// Keeps the rejection's own status (400, 415 or 422).
pub fn invalid_request(status: StatusCode, detail: String) -> ApiError {
    warn!("Rejected request: {}", detail);
    (status, Json(ErrorResponse::new("INVALID_REQUEST", detail)))
}

/// Maps a store failure to its HTTP status and error code.
pub fn compute_error(err: ComputeError) -> ApiError {
    match err {
        ComputeError::Validation(e) => {
            warn!("Validation failed: {}", e);
            bad_request("VALIDATION_ERROR", e.to_string())
        }
        ComputeError::InvoiceNotFound(_) => {
            warn!("{}", err);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("INVOICE_NOT_FOUND", err.to_string())),
            )
        }
        ComputeError::DataFrame(_) | ComputeError::Series(_) | ComputeError::Amount(_) => {
            error!("Computation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("COMPUTE_ERROR", err.to_string())),
            )
        }
    }
}
