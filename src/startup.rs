use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::handlers::{
    app::{health_check, index},
    decide::decide_handler,
    metrics_view::{metrics_fragment, metrics_page},
    ops::service_metrics,
    proxy::{decide_proxy, metrics_proxy},
};
use crate::middleware::{metrics::metrics_middleware, request_id::request_id_middleware};
use crate::services::decision_client::DecisionClient;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/decide", post(decide_handler))
        .route("/metrics", get(metrics_page))
        .route("/metrics/data", get(metrics_fragment))
        .route("/internal/metrics", get(service_metrics))
        .route("/api/v1/payments/decide", post(decide_proxy))
        .route("/api/v1/metrics", get(metrics_proxy))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration. Binding port 0
    /// picks a random free port, which tests rely on.
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        crate::services::metrics::init_metrics();

        let decision_client = Arc::new(DecisionClient::new(configuration.backend.clone()));
        let state = AppState::new(decision_client);

        let address: SocketAddr = format!(
            "{}:{}",
            configuration.server.host, configuration.server.port
        )
        .parse()?;
        let listener = TcpListener::bind(address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);

        tracing::info!("Starting paynow-console on port {}", self.port);
        axum::serve(self.listener, app).await
    }
}
