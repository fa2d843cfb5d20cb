//! HTTP source for chart data
//!
//! Success shape:
//! `{"status": <anything but "error">, "data": {"datasetOne": [..], "datasetTwo": [..]}}`.
//! Transport failures, non-2xx responses and `"status": "error"` payloads are
//! all failures.

use serde_json::Value;
use thiserror::Error;

use super::series::SeriesPair;

/// Endpoint used when neither the config file nor the CLI names one
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:3001/api/data/chart-data";

/// Errors that can occur while fetching chart data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Network response was not ok (HTTP {0})")]
    Status(u16),

    /// Body was not JSON or lacked the expected series
    #[error("Decode error: {0}")]
    Decode(String),

    /// Payload reported `"status": "error"`
    #[error("Application error: {0}")]
    Application(String),
}

/// Chart data endpoint
#[derive(Debug, Clone)]
pub struct ChartSource {
    client: reqwest::Client,
    url: String,
}

impl ChartSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the series pair
    ///
    /// Failures are logged here; callers only see the error value.
    pub async fn fetch(&self) -> Result<SeriesPair, FetchError> {
        let result = self.fetch_inner().await;
        if let Err(e) = &result {
            log::error!("Error fetching chart data from {}: {}", self.url, e);
        }
        result
    }

    async fn fetch_inner(&self) -> Result<SeriesPair, FetchError> {
        log::debug!("Fetching chart data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        interpret_body(&body)
    }
}

/// Decode a response body into a series pair
pub fn interpret_body(body: &str) -> Result<SeriesPair, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if value.get("status").and_then(Value::as_str) == Some("error") {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(FetchError::Application(message));
    }

    let data = value
        .get("data")
        .cloned()
        .ok_or_else(|| FetchError::Decode("missing `data` field".to_string()))?;

    serde_json::from_value(data).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
