pub mod invoice;
pub mod report;

use common::{ApiResponse, ErrorResponse};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use crate::session::{session_id, SESSION_HEADER};
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Turns a non-OK response into the API's error message.
async fn error_message(method: &str, endpoint: &str, response: Response) -> String {
    log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
    let error_response: Result<ErrorResponse, _> = response.json().await;
    match error_response {
        Ok(err) => {
            log::error!("{} {} - API error {}: {}", method, endpoint, err.code, err.error);
            err.error
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", response.status());
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

async fn parse_envelope<T>(method: &str, endpoint: &str, response: Response) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        return Err(error_message(method, endpoint, response).await);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        })?;

    if !api_response.warnings.is_empty() {
        log::warn!("{} {} - {} warning(s)", method, endpoint, api_response.warnings.len());
    }
    log::info!("{} {} - Success", method, endpoint);
    Ok(api_response)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .header(SESSION_HEADER, &session_id())
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_envelope("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .header(SESSION_HEADER, &session_id())
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_envelope("POST", endpoint, response).await
}

/// Common DELETE request handler
pub async fn delete<T>(endpoint: &str) -> Result<ApiResponse<T>, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("DELETE request to: {}", url);

    let response = Request::delete(&url)
        .header(SESSION_HEADER, &session_id())
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("DELETE {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_envelope("DELETE", endpoint, response).await
}
