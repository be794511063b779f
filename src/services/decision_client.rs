use crate::config::BackendSettings;
use crate::models::{error_body, DecisionRequest, NETWORK_ERROR_CODE};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const DECIDE_PATH: &str = "/api/v1/payments/decide";
pub const METRICS_PATH: &str = "/api/v1/metrics";

/// Failure modes of the backend metrics fetch.
///
/// The Display output is what the metrics view shows; the status variant
/// mirrors the backend's status line (e.g. "Error: 500 Internal Server
/// Error").
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error: {0}")]
    Status(StatusCode),
}

/// HTTP client for the PayNow decision backend.
///
/// Every call injects the configured X-API-Key header. There is no retry,
/// timeout, or cancellation: one attempt per user action.
pub struct DecisionClient {
    client: Client,
    settings: BackendSettings,
}

impl DecisionClient {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    /// Submit a decision request and return the backend's body verbatim.
    ///
    /// Transport failures (send errors, unreadable bodies) are converted
    /// into a body in the backend's error shape with code NETWORK_ERROR,
    /// so callers render every outcome the same way.
    pub async fn decide(&self, request: &DecisionRequest) -> Value {
        let url = format!("{}{}", self.settings.url, DECIDE_PATH);

        let result = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .json(request)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                match response.json::<Value>().await {
                    Ok(body) => {
                        tracing::info!(status = %status, "Decision response received");
                        body
                    }
                    Err(e) => {
                        tracing::error!("Failed to read decision response body: {}", e);
                        error_body(NETWORK_ERROR_CODE, &e.to_string())
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to send decision request to {}: {}", url, e);
                error_body(NETWORK_ERROR_CODE, &e.to_string())
            }
        }
    }

    /// Fetch the backend metrics snapshot.
    ///
    /// Any non-2xx status is an error; the body is only read on success.
    pub async fn fetch_metrics(&self) -> Result<Value, BackendError> {
        let url = format!("{}{}", self.settings.url, METRICS_PATH);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Forward a JSON POST to the backend at the given path, for the proxy
    /// surface. The caller mirrors status and body back to its client.
    pub async fn forward_post(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.settings.url, path);

        self.client
            .post(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .json(body)
            .send()
            .await
    }

    /// Forward a GET to the backend at the given path.
    pub async fn forward_get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.settings.url, path);

        self.client
            .get(&url)
            .header(API_KEY_HEADER, self.settings.api_key.expose_secret())
            .send()
            .await
    }
}
