//! Integration tests for the shared clipboard.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn save(app: &TestApp, body: serde_json::Value) -> crate::helpers::TestResponse {
    app.request("POST", "/api/clip", Some(body), None).await
}

#[tokio::test]
async fn test_empty_clipboard_is_version_zero() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/clip", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], json!(""));
    assert_eq!(response.body["version"], json!(0));
    assert!(response.body["lastModified"].is_i64());
}

#[tokio::test]
async fn test_save_then_get() {
    let app = TestApp::new().await;

    let response = save(&app, json!({ "content": "hello" })).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["version"], json!(1));

    let response = save(&app, json!({ "content": "world", "expectedVersion": 1 })).await;
    assert_eq!(response.body["version"], json!(2));

    let response = app.request("GET", "/api/clip", None, None).await;
    assert_eq!(response.body["content"], json!("world"));
    assert_eq!(response.body["version"], json!(2));
}

#[tokio::test]
async fn test_stale_version_conflicts() {
    let app = TestApp::new().await;
    save(&app, json!({ "content": "first" })).await;
    save(&app, json!({ "content": "second" })).await;

    let response = save(&app, json!({ "content": "late", "expectedVersion": 1 })).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["conflict"], json!(true));
    assert_eq!(response.body["currentData"]["content"], json!("second"));
    assert_eq!(response.body["currentData"]["version"], json!(2));
    assert_eq!(response.body["message"], json!("Content was modified by another user"));

    let response = app.request("GET", "/api/clip", None, None).await;
    assert_eq!(response.body["content"], json!("second"));
}

#[tokio::test]
async fn test_non_string_content_is_rejected() {
    let app = TestApp::new().await;

    for body in [json!({ "content": 42 }), json!({})] {
        let response = save(&app, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), "Content must be a string");
    }
}

#[tokio::test]
async fn test_history_tracks_replaced_content() {
    let app = TestApp::new().await;
    for content in ["one", "two", "three"] {
        save(&app, json!({ "content": content })).await;
    }

    let response = app.request("GET", "/api/clip/history", None, None).await;
    let history = response.body.as_array().unwrap();
    let contents: Vec<_> = history.iter().map(|h| h["content"].clone()).collect();
    assert_eq!(contents, vec![json!("two"), json!("one")]);
    assert_eq!(history[0]["preview"], json!("two"));

    let id = history[1]["id"].as_str().unwrap().to_string();
    let response = app
        .request("DELETE", &format!("/api/clip/history/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true, "removedId": id }));

    let response = app.request("GET", "/api/clip/history", None, None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app.request("DELETE", "/api/clip/history", None, None).await;
    assert_eq!(response.body, json!({ "success": true }));
    let response = app.request("GET", "/api/clip/history", None, None).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_history_item() {
    let app = TestApp::new().await;

    let response = app
        .request("DELETE", "/api/clip/history/does-not-exist", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "History item not found");
}

#[tokio::test]
async fn test_clear_resets_clipboard() {
    let app = TestApp::new().await;
    save(&app, json!({ "content": "something" })).await;

    let response = app.request("DELETE", "/api/clip", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["content"], json!(""));
    assert_eq!(response.body["version"], json!(0));

    let response = app.request("GET", "/api/clip", None, None).await;
    assert_eq!(response.body["version"], json!(0));
}
