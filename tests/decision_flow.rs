mod common;

use common::{TestApp, TEST_API_KEY};
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_form(idempotency_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("customerId", "c_customer_001".to_string()),
        ("amount", "125.50".to_string()),
        ("currency", "USD".to_string()),
        ("payeeId", "p_merchant_789".to_string()),
        ("idempotencyKey", idempotency_key.to_string()),
    ]
}

#[tokio::test]
async fn approve_response_renders_json_and_humanized_trace() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/payments/decide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "decision": "APPROVE",
                "reasons": ["low_risk"],
                "requestId": "r1",
                "agentTrace": [{ "step": "risk_check", "detail": "ok" }],
            },
            "timestamp": "2024-01-01T00:00:00Z",
        })))
        .mount(&backend)
        .await;

    let app = TestApp::spawn(&backend.uri()).await;
    let client = Client::new();

    let body = client
        .post(format!("{}/decide", app.address))
        .form(&sample_form("idempotency-key-1"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    // Pretty-printed JSON, HTML-escaped inside the <pre> block.
    assert!(body.contains("&quot;decision&quot;: &quot;APPROVE&quot;"));
    assert!(body.contains("&quot;requestId&quot;: &quot;r1&quot;"));
    // Trace list item with underscores replaced by spaces.
    assert!(body.contains("<strong>risk check:</strong> ok"));
}

#[tokio::test]
async fn amount_text_is_sent_as_a_json_number() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/payments/decide"))
        .and(header("X-API-Key", TEST_API_KEY))
        .and(body_partial_json(json!({
            "customerId": "c_customer_001",
            "amount": 125.5,
            "idempotencyKey": "idempotency-key-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "timestamp": "2024-01-01T00:00:00Z",
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = TestApp::spawn(&backend.uri()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/decide", app.address))
        .form(&sample_form("idempotency-key-1"))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn network_failure_synthesizes_the_error_contract() {
    let app = TestApp::spawn_with_dead_backend().await;
    let client = Client::new();

    let body = client
        .post(format!("{}/decide", app.address))
        .form(&sample_form("idempotency-key-1"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(body.contains("&quot;success&quot;: false"));
    assert!(body.contains("NETWORK_ERROR"));
}

#[tokio::test]
async fn idempotency_key_is_regenerated_after_every_attempt() {
    let app = TestApp::spawn_with_dead_backend().await;
    let client = Client::new();

    let submitted = "idempotency-key-1";
    let body = client
        .post(format!("{}/decide", app.address))
        .form(&sample_form(submitted))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    // The fragment swaps a fresh key back into the form out-of-band.
    assert!(body.contains("hx-swap-oob"));
    let fresh = extract_idempotency_key(&body).expect("No idempotency key in fragment");
    assert_ne!(fresh, submitted);
}

#[tokio::test]
async fn non_numeric_amount_is_a_local_error() {
    let app = TestApp::spawn_with_dead_backend().await;
    let client = Client::new();

    let mut form = sample_form("idempotency-key-1");
    form[1] = ("amount", "not-a-number".to_string());

    let body = client
        .post(format!("{}/decide", app.address))
        .form(&form)
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .unwrap();

    assert!(body.contains("INVALID_AMOUNT"));
    assert!(body.contains("&quot;success&quot;: false"));
}

fn extract_idempotency_key(html: &str) -> Option<String> {
    let start = html.find("idempotency-key-")?;
    let rest = &html[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
