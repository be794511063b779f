use askama::Template;
use axum::{extract::State, response::IntoResponse};

use crate::AppState;

#[derive(Template)]
#[template(path = "metrics.html")]
pub struct MetricsPageTemplate {}

#[derive(Template)]
#[template(path = "metrics_data.html")]
pub struct MetricsDataTemplate {
    pub metrics_json: String,
}

#[derive(Template)]
#[template(path = "metrics_error.html")]
pub struct MetricsErrorTemplate {
    pub message: String,
}

/// Metrics page shell. The content loads once on mount via /metrics/data;
/// a full reload is required to re-fetch.
pub async fn metrics_page() -> impl IntoResponse {
    MetricsPageTemplate {}
}

/// Fetch the backend metrics snapshot and render it, or the failure.
pub async fn metrics_fragment(State(state): State<AppState>) -> impl IntoResponse {
    match state.decision_client.fetch_metrics().await {
        Ok(metrics) => {
            let metrics_json = serde_json::to_string_pretty(&metrics)
                .unwrap_or_else(|_| metrics.to_string());
            MetricsDataTemplate { metrics_json }.into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch backend metrics: {}", e);
            MetricsErrorTemplate {
                message: e.to_string(),
            }
            .into_response()
        }
    }
}
