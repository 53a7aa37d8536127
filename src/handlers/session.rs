use crate::schemas::AppState;
use crate::session::SessionId;
use axum::{extract::State, response::Json};
use common::{ApiResponse, SessionEnded};
use tracing::{info, instrument};

/// End the caller's session and discard its records
#[utoipa::path(
    delete,
    path = "/api/v1/session",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier, `default` when absent")
    ),
    responses(
        (status = 200, description = "Session ended", body = ApiResponse<SessionEnded>)
    ),
    tag = "session"
)]
#[instrument(skip(state, session), fields(session = %session.as_str()))]
pub async fn end_session(
    State(state): State<AppState>,
    session: SessionId,
) -> Json<ApiResponse<SessionEnded>> {
    let discarded_records = state.sessions.end(session.as_str()).await;
    info!("Session ended with {} record(s) discarded", discarded_records);

    Json(ApiResponse::ok(
        SessionEnded {
            session_id: session.0,
            discarded_records,
        },
        "Session ended",
    ))
}
