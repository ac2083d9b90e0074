//! Integration tests for the file manager routes.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_file_routes_require_files_scope() {
    let app = TestApp::new().await;

    let cases = [
        ("GET", "/api/r2/files", None),
        ("DELETE", "/api/r2/files/a.txt", None),
        ("POST", "/api/r2/refresh-urls", Some(json!({ "keys": ["a"] }))),
        ("POST", "/api/r2/share-link", Some(json!({ "key": "a", "duration": "24h" }))),
    ];

    for (method, path, body) in cases {
        let response = app.request(method, path, body, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body, json!({ "success": false, "error": "Unauthorized" }));
    }

    let response = app.upload("a.txt", b"hello", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_list_delete() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let response = app.upload("notes.txt", b"hello world", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["file"]["key"], json!("notes.txt"));
    assert_eq!(response.body["file"]["size"], json!(11));
    assert_eq!(response.body["file"]["status"], json!("uploaded"));

    let response = app.request("GET", "/api/r2/files", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], json!(1));
    let item = &response.body["files"][0];
    assert_eq!(item["key"], json!("notes.txt"));
    assert_eq!(item["name"], json!("notes.txt"));
    assert!(item["lastModified"].is_string());
    assert!(item["url"].as_str().unwrap().starts_with("/d/bm90ZXMudHh0?e="));

    let response = app
        .request("DELETE", "/api/r2/files/notes.txt", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let response = app.request("GET", "/api/r2/files", None, Some(&cookie)).await;
    assert_eq!(response.body["total"], json!(0));
}

#[tokio::test]
async fn test_list_filters_by_prefix_and_limit() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;
    app.put_object("docs/a.txt", b"a").await;
    app.put_object("docs/b.txt", b"b").await;
    app.put_object("img/c.png", b"c").await;

    let response = app
        .request("GET", "/api/r2/files?prefix=docs/", None, Some(&cookie))
        .await;
    assert_eq!(response.body["total"], json!(2));

    let response = app
        .request("GET", "/api/r2/files?maxKeys=1", None, Some(&cookie))
        .await;
    assert_eq!(response.body["total"], json!(1));
}

#[tokio::test]
async fn test_delete_decodes_percent_encoded_key() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;
    app.put_object("docs/my file.txt", b"x").await;

    let response = app
        .request("DELETE", "/api/r2/files/docs%2Fmy%20file.txt", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/r2/files", None, Some(&cookie)).await;
    assert_eq!(response.body["total"], json!(0));
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let response = app.upload("", b"orphan bytes", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "No file provided");
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = TestApp::with_config(|c| c.storage.max_upload_size_bytes = 8).await;
    let cookie = app.login_files().await;

    let response = app.upload("big.txt", b"more than eight bytes", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/r2/files", None, Some(&cookie)).await;
    assert_eq!(response.body["total"], json!(0));
}

#[tokio::test]
async fn test_refresh_urls() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let response = app
        .request(
            "POST",
            "/api/r2/refresh-urls",
            Some(json!({ "keys": ["a.txt", "b/c.txt"] })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let urls = response.body["urls"].as_array().unwrap();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0]["key"], json!("a.txt"));
    assert_eq!(urls[0]["success"], json!(true));
    assert!(urls[1]["url"].as_str().unwrap().starts_with("/d/Yi9jLnR4dA?e="));

    let response = app
        .request("POST", "/api/r2/refresh-urls", Some(json!({})), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid keys provided");
}
