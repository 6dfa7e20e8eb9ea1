//! HTTP client for the booking system API.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;

/// Per-request timeout for booking API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the booking system's admin API.
///
/// All tools share one client; cloning is cheap and reuses the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct BookingApi {
    client: reqwest::Client,
    base_url: String,
}

impl BookingApi {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ToolError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON payload from `path` with the given query parameters.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ToolError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} with {} params", url, query.len());

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "booking API returned status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }

    /// PUT a JSON body to `path`, discarding the response body.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<(), ToolError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("PUT {}", url);

        let response = self.client.put(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::ExecutionFailed(format!(
                "booking API returned status {}",
                status
            )));
        }

        Ok(())
    }
}
