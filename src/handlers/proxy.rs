use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::models::{error_body, NETWORK_ERROR_CODE};
use crate::services::decision_client::{DECIDE_PATH, METRICS_PATH};
use crate::AppState;

/// POST /api/v1/payments/decide, forwarded verbatim to the backend with the
/// configured API key injected.
pub async fn decide_proxy(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match state.decision_client.forward_post(DECIDE_PATH, &body).await {
        Ok(upstream) => mirror(upstream).await,
        Err(e) => {
            tracing::error!("Decide proxy request failed: {}", e);
            unreachable_backend(&e.to_string())
        }
    }
}

/// GET /api/v1/metrics, forwarded verbatim.
pub async fn metrics_proxy(State(state): State<AppState>) -> Response {
    match state.decision_client.forward_get(METRICS_PATH).await {
        Ok(upstream) => mirror(upstream).await,
        Err(e) => {
            tracing::error!("Metrics proxy request failed: {}", e);
            unreachable_backend(&e.to_string())
        }
    }
}

/// Mirror the backend's status, content type, and body back to the caller.
async fn mirror(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();

    match upstream.bytes().await {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::error!("Failed to read proxied response body: {}", e);
            unreachable_backend(&e.to_string())
        }
    }
}

fn unreachable_backend(message: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(error_body(NETWORK_ERROR_CODE, message)),
    )
        .into_response()
}
