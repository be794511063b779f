pub mod decision_client;
pub mod metrics;
