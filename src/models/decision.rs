use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Error code used when a request never completed on the wire.
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

/// Payload sent to the backend decide endpoint.
///
/// The amount is numeric on the wire even though the form collects it as
/// text; the handler owns the conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub customer_id: String,
    pub amount: f64,
    pub currency: String,
    pub payee_id: String,
    pub idempotency_key: String,
}

/// One step of the agent trace the backend may attach to a decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step: String,
    pub detail: String,
}

/// Build a response body in the backend's error shape, so local failures
/// render through the same path as backend ones.
pub fn error_body(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "error": {
            "code": code,
            "message": message,
        },
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
