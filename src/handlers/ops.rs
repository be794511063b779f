use axum::response::IntoResponse;

/// Prometheus metrics for this service itself, as opposed to the backend
/// snapshot shown on /metrics.
pub async fn service_metrics() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        crate::services::metrics::get_metrics(),
    )
}
