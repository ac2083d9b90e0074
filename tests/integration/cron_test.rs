//! Integration tests for keepalive and health.

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::json;

use crate::helpers::{CRON_SECRET, TestApp};

fn keepalive(authorization: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri("/api/cron/keepalive");
    if let Some(value) = authorization {
        req = req.header(header::AUTHORIZATION, value);
    }
    req.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_keepalive_reports_clipboard_presence() {
    let app = TestApp::new().await;
    let bearer = format!("Bearer {CRON_SECRET}");

    let response = app.send(keepalive(Some(&bearer))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["hasData"], json!(false));
    assert!(response.body["timestamp"].is_string());

    app.request("POST", "/api/clip", Some(json!({ "content": "x" })), None)
        .await;
    let response = app.send(keepalive(Some(&bearer))).await;
    assert_eq!(response.body["hasData"], json!(true));
}

#[tokio::test]
async fn test_keepalive_rejects_bad_credentials() {
    let app = TestApp::new().await;

    for auth in [None, Some("Bearer wrong"), Some(CRON_SECRET)] {
        let response = app.send(keepalive(auth)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{auth:?}");
        assert_eq!(response.error(), "Unauthorized");
    }
}

#[tokio::test]
async fn test_keepalive_unconfigured_is_server_error() {
    let app = TestApp::with_config(|c| c.cron.secret = None).await;

    let response = app.send(keepalive(Some("Bearer anything"))).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["data"]["status"], json!("ok"));
    assert!(response.body["data"]["uptimeSeconds"].is_u64());
}
