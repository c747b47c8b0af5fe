use crate::utils::error::{Result, ScreeningError};
use reqwest::{Client, Response};
use std::time::Duration;

pub fn build_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(client)
}

/// Reads a JSON body, turning non-2xx statuses into [`ScreeningError::ServiceError`].
///
/// Services answer failures with `{"error": ...}` or `{"detail": ...}`; either
/// is surfaced as the message when present.
pub async fn read_json(service: &str, response: Response) -> Result<serde_json::Value> {
    let status = response.status();
    tracing::debug!("{} response status: {}", service, status);
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("detail"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);
        return Err(ScreeningError::ServiceError {
            service: service.to_string(),
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ScreeningError::UnexpectedResponse {
        service: service.to_string(),
        message: format!("body is not JSON: {}", e),
    })
}

pub fn missing_field(service: &str, field: &str) -> ScreeningError {
    ScreeningError::UnexpectedResponse {
        service: service.to_string(),
        message: format!("missing field '{}'", field),
    }
}
