//! HTTP client for the forms REST API
//!
//! Form configuration is persisted by a PUT that replaces the stored
//! document wholesale; there is no partial-update call.

use crate::api::traits::FormsApi;
use crate::state::FormDocument;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Default forms API base URL
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8787";

/// Request timeout for API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Response to a successful form update.
///
/// Only receipt of the response matters to the save flow; the echoed body is
/// kept for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedForm {
    pub form_id: String,
    #[allow(dead_code)]
    pub form: Value,
}

/// Error type for forms API operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Client for the forms REST API
#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::Client,
    api_base: String,
}

impl FormsClient {
    /// Create a new client.
    ///
    /// The base URL comes from the explicit argument, then the
    /// `FORMBUILDER_API_BASE` environment variable, then the default.
    pub fn new(api_base: Option<String>) -> Result<Self> {
        let api_base = api_base
            .or_else(|| std::env::var("FORMBUILDER_API_BASE").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let http = reqwest::Client::builder()
            .user_agent(format!("formbuilder-tui/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, api_base })
    }

    fn form_url(&self, form_id: &str) -> String {
        format!(
            "{}/cf-api/v2/forms/{}",
            self.api_base.trim_end_matches('/'),
            form_id
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl FormsApi for FormsClient {
    async fn fetch_form(&self, form_id: &str) -> Result<FormDocument> {
        let response = self
            .http
            .get(self.form_url(form_id))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::check_status(response).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        FormDocument::from_host_value(value)
            .map_err(|e| anyhow!("Failed to read form document: {e}"))
    }

    async fn update_form(&self, form_id: &str, document: &FormDocument) -> Result<SavedForm> {
        let response = self
            .http
            .put(self.form_url(form_id))
            .json(document)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::check_status(response).await?;
        let saved = response
            .json::<SavedForm>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_url_joins_base_and_id() {
        let client = FormsClient::new(Some("http://forms.example".to_string())).unwrap();
        assert_eq!(
            client.form_url("CF1"),
            "http://forms.example/cf-api/v2/forms/CF1"
        );
    }

    #[test]
    fn test_form_url_tolerates_trailing_slash() {
        let client = FormsClient::new(Some("http://forms.example/".to_string())).unwrap();
        assert_eq!(
            client.form_url("CF1"),
            "http://forms.example/cf-api/v2/forms/CF1"
        );
    }

    #[test]
    fn test_status_error_display() {
        let error = ApiError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(error.to_string(), "server returned HTTP 403: forbidden");
    }

    #[test]
    fn test_saved_form_deserializes() {
        let saved: SavedForm = serde_json::from_value(serde_json::json!({
            "form_id": "CF1",
            "form": { "ID": "CF1" }
        }))
        .unwrap();
        assert_eq!(saved.form_id, "CF1");
    }
}
