use askama::Template;
use axum::response::IntoResponse;

use crate::utils::fresh_idempotency_key;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub idempotency_key: String,
}

/// Decision form page. Each render embeds a fresh idempotency key.
pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        idempotency_key: fresh_idempotency_key(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
