pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
pub mod utils;

use services::decision_client::DecisionClient;
use std::sync::Arc;

/// Shared application state containing the backend client.
#[derive(Clone)]
pub struct AppState {
    pub decision_client: Arc<DecisionClient>,
}

impl AppState {
    pub fn new(decision_client: Arc<DecisionClient>) -> Self {
        Self { decision_client }
    }
}
