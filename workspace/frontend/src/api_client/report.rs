use common::{ApiResponse, CustomerReportDto, ReminderDto, SessionEnded};
use crate::api_client;
use crate::session;

/// Get the per-customer report over the active records
pub async fn get_report() -> Result<ApiResponse<CustomerReportDto>, String> {
    log::trace!("Fetching customer report");
    let result = api_client::get("/report").await;
    match &result {
        Ok(response) => log::info!("Report covers {} customer(s)", response.data.customers.len()),
        Err(e) => log::error!("Failed to fetch report: {}", e),
    }
    result
}

/// Get the static reminder notice
pub async fn get_reminders() -> Result<ApiResponse<ReminderDto>, String> {
    api_client::get("/reminders").await
}

/// End the current session on the server and start a fresh one locally
pub async fn end_session() -> Result<ApiResponse<SessionEnded>, String> {
    log::debug!("Ending session");
    let result: Result<ApiResponse<SessionEnded>, String> = api_client::delete("/session").await;
    if let Ok(response) = &result {
        log::info!(
            "Session {} ended, {} record(s) discarded",
            response.data.session_id,
            response.data.discarded_records
        );
        session::reset_session_id();
    }
    result
}
