//! Integration tests for GeminiClient retry and fallback behavior

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gemini_client::{GeminiAsk, GeminiClient, GeminiError};
use healthbot_core::{messages, Language};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(Some("test_key".to_string()))
        .with_base_url(server.uri())
        .with_model("gemini-1.5-flash")
        .with_backoff(Duration::from_millis(1))
}

/// Two transient failures followed by a success must yield the successful
/// text on the third attempt.
#[tokio::test]
async fn test_succeeds_on_third_attempt() {
    let mock_server = MockServer::start().await;
    let request_count = Arc::new(AtomicUsize::new(0));
    let counter = request_count.clone();

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test_key"))
        .respond_with(move |_req: &wiremock::Request| {
            let count = counter.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                ResponseTemplate::new(503).set_body_string(r#"{"error": "Service Unavailable"}"#)
            } else {
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "candidates": [{
                        "content": {
                            "parts": [{ "text": "Rest and drink fluids." }]
                        }
                    }]
                }))
            }
        })
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.ask("I have a fever", Language::En, false).await.unwrap();

    assert_eq!(reply, "Rest and drink fluids.");
    assert_eq!(request_count.load(Ordering::SeqCst), 3);
}

/// Exhausting all attempts yields an error, never a panic.
#[tokio::test]
async fn test_unavailable_after_three_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .ask("I have a fever", Language::En, false)
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Unavailable { attempts: 3 }));
}

/// The flat `text` response shape is accepted as-is.
#[tokio::test]
async fn test_direct_text_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": "Take rest." })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.ask("I feel tired", Language::En, true).await.unwrap();
    assert_eq!(reply, "Take rest.");
}

/// A successful call without extractable text substitutes the localized
/// fallback and does not retry.
#[tokio::test]
async fn test_empty_reply_substitutes_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.ask("hello", Language::Hi, false).await.unwrap();
    assert_eq!(reply, messages::fallback(Language::Hi));
}

/// No credential short-circuits to the fallback without any HTTP call.
#[tokio::test]
async fn test_missing_key_short_circuits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(None).with_base_url(mock_server.uri());
    let reply = client.ask("hello", Language::Bn, false).await.unwrap();
    assert_eq!(reply, messages::fallback(Language::Bn));
}
