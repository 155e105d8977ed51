//! HTTP client for the homework status endpoint.

use hwbot_core::{ApiError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use tracing::error;

/// Authenticated client for the homework status endpoint.
pub struct HomeworkClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HomeworkClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            token,
        }
    }

    /// Fetches homework statuses since `from_date` (unix timestamp).
    /// Returns the decoded but unvalidated body; shape checks are
    /// [`check_response`](crate::response::check_response)'s job.
    pub async fn fetch(&self, from_date: i64) -> Result<serde_json::Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    error!(endpoint = %self.endpoint, error = %e, "Endpoint unreachable");
                    ApiError::EndpointUnreachable(e.to_string())
                } else {
                    error!(endpoint = %self.endpoint, error = %e, "Request failed");
                    ApiError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = status.as_u16(), "Unexpected response status from endpoint");
            return Err(ApiError::UnexpectedStatus(status.as_u16()).into());
        }

        let body = response.json::<serde_json::Value>().await.map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            ApiError::RequestFailed(e.to_string())
        })?;

        Ok(body)
    }
}
