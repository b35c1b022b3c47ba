//! End-to-end tests against a live server.

use auth_echo::{EchoConfig, ResponseRecord};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_defaults_without_auth_headers() {
    let server = common::start_server(EchoConfig::default()).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");

    let record: ResponseRecord = res.json().await.unwrap();
    assert_eq!(record.authenticated_user(), "unknown");
    assert_eq!(record.auth_method(), "none");
    assert_eq!(record.auth_timestamp(), "unknown");
    assert_eq!(record.language(), "Rust");

    server.stop().await;
}

#[tokio::test]
async fn test_auth_headers_echoed() {
    let server = common::start_server(EchoConfig::default()).await;

    let res = common::client()
        .get(server.url("/"))
        .header("X-Remote-User", "alice@EXAMPLE.ORG")
        .header("X-Auth-Type", "Negotiate")
        .header("X-Authenticated-Time", "2024-03-05T12:00:00+00:00")
        .header("X-Custom", "v1")
        .send()
        .await
        .unwrap();

    let record: ResponseRecord = res.json().await.unwrap();
    assert_eq!(record.authenticated_user(), "alice@EXAMPLE.ORG");
    assert_eq!(record.auth_method(), "Negotiate");
    assert_eq!(record.auth_timestamp(), "2024-03-05T12:00:00+00:00");

    let headers = record.all_headers();
    // axum/hyper store header names lowercased, so keys arrive as `x-remote-user`.
    assert_eq!(headers.get("x-remote-user").map(String::as_str), Some("alice@EXAMPLE.ORG"));
    assert_eq!(headers.get("x-custom").map(String::as_str), Some("v1"));
    // Transport-added headers are reported too.
    assert!(headers.contains_key("host"));
    assert!(headers.contains_key("x-request-id"));

    server.stop().await;
}

#[tokio::test]
async fn test_raw_json_shape() {
    let server = common::start_server(EchoConfig::default()).await;

    let json: serde_json::Value = common::client()
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for field in [
        "message",
        "service",
        "language",
        "authenticated_user",
        "auth_method",
        "auth_timestamp",
    ] {
        assert!(json[field].is_string(), "{field} should be a string");
    }
    assert!(json["all_headers"].is_object());

    server.stop().await;
}

#[tokio::test]
async fn test_empty_auth_type_is_none() {
    let server = common::start_server(EchoConfig::default()).await;

    let record: ResponseRecord = common::client()
        .get(server.url("/"))
        .header("X-Auth-Type", "")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(record.auth_method(), "none");

    server.stop().await;
}

#[tokio::test]
async fn test_health_ignores_headers() {
    let server = common::start_server(EchoConfig::default()).await;
    let client = common::client();

    let plain = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(plain.status(), StatusCode::OK);
    assert_eq!(plain.text().await.unwrap(), "OK");

    let with_auth = client
        .get(server.url("/health"))
        .header("X-Remote-User", "alice")
        .header("X-Auth-Type", "Basic")
        .send()
        .await
        .unwrap();
    assert_eq!(with_auth.status(), StatusCode::OK);
    assert_eq!(with_auth.text().await.unwrap(), "OK");

    server.stop().await;
}

#[tokio::test]
async fn test_html_enabled() {
    let server = common::start_server(EchoConfig::default()).await;

    let res = common::client()
        .get(server.url("/html"))
        .header("X-Remote-User", "<b>mallory</b>")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains("&lt;b&gt;mallory"));
    assert!(!body.contains("<b>mallory</b>"));

    server.stop().await;
}

#[tokio::test]
async fn test_html_disabled_is_not_found() {
    let mut config = EchoConfig::default();
    config.features.html_enabled = false;
    let server = common::start_server(config).await;

    let res = common::client().get(server.url("/html")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = common::start_server(EchoConfig::default()).await;

    let res = common::client().get(server.url("/nope")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn test_configured_identity_and_content_type() {
    let mut config = EchoConfig::default();
    config.identity.message = "Hello from Golang backend!".into();
    config.identity.service = "Go HTTP Server".into();
    config.identity.language = "Go".into();
    config.features.json_content_type = "application/json; charset=utf-8".into();
    let server = common::start_server(config).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json; charset=utf-8");

    let record: ResponseRecord = res.json().await.unwrap();
    assert_eq!(record.message(), "Hello from Golang backend!");
    assert_eq!(record.service(), "Go HTTP Server");
    assert_eq!(record.language(), "Go");

    server.stop().await;
}

#[tokio::test]
async fn test_request_id_propagated() {
    let server = common::start_server(EchoConfig::default()).await;
    let client = common::client();

    let generated = client.get(server.url("/")).send().await.unwrap();
    let id = generated.headers()["x-request-id"].to_str().unwrap().to_string();
    let record: ResponseRecord = generated.json().await.unwrap();
    assert_eq!(record.all_headers().get("x-request-id"), Some(&id));

    let supplied = client
        .get(server.url("/health"))
        .header("X-Request-Id", "trace-42")
        .send()
        .await
        .unwrap();
    assert_eq!(supplied.headers()["x-request-id"], "trace-42");

    server.stop().await;
}

#[tokio::test]
async fn test_repeated_requests_identical() {
    let server = common::start_server(EchoConfig::default()).await;
    let client = common::client();

    let mut records = Vec::new();
    for _ in 0..2 {
        let record: ResponseRecord = client
            .get(server.url("/"))
            .header("X-Remote-User", "alice")
            .header("X-Request-Id", "fixed")
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        records.push(record);
    }
    assert_eq!(records[0], records[1]);

    server.stop().await;
}
