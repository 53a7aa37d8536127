use crate::schemas::AppState;
use axum::{extract::State, response::Json};
use common::{ApiResponse, ReminderDto};
use tracing::instrument;

/// Static reminder notice for the collections team
#[utoipa::path(
    get,
    path = "/api/v1/reminders",
    responses(
        (status = 200, description = "Reminder retrieved successfully", body = ApiResponse<ReminderDto>)
    ),
    tag = "report"
)]
#[instrument(skip(state))]
pub async fn get_reminders(State(state): State<AppState>) -> Json<ApiResponse<ReminderDto>> {
    Json(ApiResponse::ok(
        ReminderDto {
            message: state.settings.reminder_message.clone(),
        },
        "Reminder retrieved successfully",
    ))
}
