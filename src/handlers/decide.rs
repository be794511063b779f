use askama::Template;
use axum::{extract::State, response::IntoResponse, Form};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{error_body, DecisionRequest, TraceStep};
use crate::utils::fresh_idempotency_key;
use crate::AppState;

/// Raw form state as posted by the browser. Amount stays text here; the
/// handler converts it before anything goes on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionForm {
    pub customer_id: String,
    pub amount: String,
    pub currency: String,
    pub payee_id: String,
    pub idempotency_key: String,
}

/// One trace line prepared for display: underscores in the step name are
/// already replaced with spaces.
pub struct TraceLine {
    pub step: String,
    pub detail: String,
}

#[derive(Template)]
#[template(path = "response.html")]
pub struct ResponseTemplate {
    pub response_json: String,
    pub trace: Vec<TraceLine>,
    pub idempotency_key: String,
}

/// Submit the decision form to the backend and render the outcome.
///
/// Exactly one backend call per submission. Whatever happens, the rendered
/// fragment swaps a regenerated idempotency key back into the form, so a
/// resubmission is a distinct logical attempt.
pub async fn decide_handler(
    State(state): State<AppState>,
    Form(form): Form<DecisionForm>,
) -> impl IntoResponse {
    let body = match form.amount.trim().parse::<f64>() {
        Ok(amount) => {
            let request = DecisionRequest {
                customer_id: form.customer_id,
                amount,
                currency: form.currency,
                payee_id: form.payee_id,
                idempotency_key: form.idempotency_key,
            };

            tracing::info!(
                idempotency_key = %request.idempotency_key,
                amount = request.amount,
                currency = %request.currency,
                "Submitting decision request"
            );

            state.decision_client.decide(&request).await
        }
        Err(_) => {
            tracing::warn!(amount = %form.amount, "Rejected non-numeric amount");
            error_body(
                "INVALID_AMOUNT",
                &format!("Amount '{}' is not a number", form.amount),
            )
        }
    };

    let trace = extract_trace(&body);
    let response_json =
        serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());

    ResponseTemplate {
        response_json,
        trace,
        idempotency_key: fresh_idempotency_key(),
    }
}

/// Pull the optional agent trace out of the response body. A missing or
/// malformed trace simply renders nothing.
fn extract_trace(body: &Value) -> Vec<TraceLine> {
    body.get("data")
        .and_then(|data| data.get("agentTrace"))
        .and_then(|trace| serde_json::from_value::<Vec<TraceStep>>(trace.clone()).ok())
        .map(|steps| {
            steps
                .into_iter()
                .map(|step| TraceLine {
                    step: step.step.replace('_', " "),
                    detail: step.detail,
                })
                .collect()
        })
        .unwrap_or_default()
}
