//! Tests for the HTTP transport.

use std::collections::HashMap;
use std::time::Duration;

use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::Remote;
use crate::types::RemoteConfig;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[tokio::test]
async fn test_post_sends_form_encoded_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("action=get"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote
        .post(&format!("{}/v1", server.uri()), &fields(&[("action", "get")]))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_post_strips_backslashes_from_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    remote
        .post(
            &format!("{}/v1", server.uri()),
            &fields(&[("security", r#"{\"key\":\"value\"}"#)]),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    // Backslashes are stripped before encoding, so neither a raw backslash
    // nor its percent-encoding may appear.
    assert!(!body.contains('\\'));
    assert!(!body.contains("%5C"));
    assert!(body.contains("security="));
}

#[tokio::test]
async fn test_get_with_query_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/status"))
        .and(query_param("session_id", "abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"meta": {"status": true}})),
        )
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote
        .get(
            &format!("{}/v1/status", server.uri()),
            Some(&fields(&[("session_id", "abc123")])),
        )
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.content_type.starts_with("application/json"));
    assert!(response.body.contains("status"));
}

#[tokio::test]
async fn test_get_without_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain"))
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote.get(&format!("{}/v1", server.uri()), None).await.unwrap();
    assert_eq!(response.body, "plain");
}

#[tokio::test]
async fn test_non_2xx_response_is_captured_not_errored() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote
        .post(&format!("{}/v1", server.uri()), &fields(&[]))
        .await
        .unwrap();

    assert_eq!(response.status_code, 503);
    assert!(!response.is_success());
    assert_eq!(response.body, "unavailable");
}

#[tokio::test]
async fn test_response_headers_are_captured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-42")
                .set_body_string(""),
        )
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote.get(&format!("{}/v1", server.uri()), None).await.unwrap();
    assert_eq!(response.header("X-Request-Id"), Some("req-42"));
}

#[tokio::test]
async fn test_time_taken_is_recorded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
        .mount(&server)
        .await;

    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let response = remote.get(&format!("{}/v1", server.uri()), None).await.unwrap();
    assert!(response.time_taken >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_connection_refused() {
    // A port that is definitely not listening.
    let remote = Remote::new(RemoteConfig::default()).unwrap();
    let result = remote.post("http://127.0.0.1:1/v1", &fields(&[])).await;
    assert!(result.is_err());
}
