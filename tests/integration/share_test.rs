//! Integration tests for share-link creation and public download.

use http::{StatusCode, header};
use serde_json::json;

use crate::helpers::TestApp;

async fn create_link(app: &TestApp, cookie: &str, key: &str, duration: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/r2/share-link",
            Some(json!({ "key": key, "duration": duration })),
            Some(cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["shareLink"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_share_link_downloads_object() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;
    app.put_object("reports/q3 résumé.txt", b"quarterly").await;

    let link = create_link(&app, &cookie, "reports/q3 résumé.txt", "7d").await;
    assert!(link.starts_with("/d/"));

    // The download is public: no cookie.
    let response = app.request("GET", &link, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.bytes[..], b"quarterly");
    assert_eq!(response.header(header::CONTENT_TYPE), Some("text/plain"));
    assert_eq!(response.header(header::CACHE_CONTROL), Some("private, max-age=3600"));
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        Some("attachment; filename=\"q3%20r%C3%A9sum%C3%A9.txt\"")
    );
}

#[tokio::test]
async fn test_share_link_validation() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let cases = [
        (json!({ "key": "a.txt" }), "Missing key or duration"),
        (json!({ "key": "", "duration": "24h" }), "Missing key or duration"),
        (json!({ "key": "a.txt", "duration": "2w" }), "Invalid duration"),
    ];
    for (body, message) in cases {
        let response = app
            .request("POST", "/api/r2/share-link", Some(body), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), message);
    }
}

#[tokio::test]
async fn test_expired_link_is_gone() {
    let app = TestApp::new().await;
    app.put_object("old.txt", b"x").await;

    let link = app.state.signer.generate_link_at("old.txt", 60, 1_000);
    let response = app.request("GET", &link.path(), None, None).await;

    assert_eq!(response.status, StatusCode::GONE);
    assert_eq!(response.error(), "Link expired");
}

#[tokio::test]
async fn test_tampered_signature_is_forbidden() {
    let app = TestApp::new().await;
    app.put_object("a.txt", b"x").await;

    let link = app.state.signer.generate_link("a.txt", 3600);
    let path = format!("/d/{}?e={}&s=0000000000000000", link.encoded_key, link.expires);
    let response = app.request("GET", &path, None, None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error(), "Invalid signature");
}

#[tokio::test]
async fn test_link_for_other_key_is_forbidden() {
    let app = TestApp::new().await;
    app.put_object("a.txt", b"a").await;
    app.put_object("b.txt", b"b").await;

    let link = app.state.signer.generate_link("a.txt", 3600);
    let other = app.state.signer.generate_link("b.txt", 3600);
    let path = format!("/d/{}?e={}&s={}", other.encoded_key, link.expires, link.signature);
    let response = app.request("GET", &path, None, None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_extended_expiry_is_forbidden() {
    let app = TestApp::new().await;
    app.put_object("a.txt", b"a").await;

    let link = app.state.signer.generate_link("a.txt", 60);
    let path = format!(
        "/d/{}?e={}&s={}",
        link.encoded_key,
        link.expires + 86_400,
        link.signature
    );
    let response = app.request("GET", &path, None, None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_parameters() {
    let app = TestApp::new().await;

    for path in ["/d/YS50eHQ", "/d/YS50eHQ?e=1", "/d/YS50eHQ?s=abc"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.error(), "Missing parameters");
    }
}

#[tokio::test]
async fn test_valid_link_to_missing_object() {
    let app = TestApp::new().await;

    let link = app.state.signer.generate_link("ghost.txt", 3600);
    let response = app.request("GET", &link.path(), None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "File not found");
}

#[tokio::test]
async fn test_listing_url_downloads() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;
    app.put_object("data.bin", b"\x00\x01\x02").await;

    let response = app.request("GET", "/api/r2/files", None, Some(&cookie)).await;
    let url = response.body["files"][0]["url"].as_str().unwrap().to_string();

    let response = app.request("GET", &url, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.bytes[..], b"\x00\x01\x02");
    assert_eq!(response.header(header::CONTENT_LENGTH), Some("3"));
}

#[tokio::test]
async fn test_download_is_not_gzipped() {
    let app = TestApp::new().await;
    app.put_object("notes.txt", &[b'a'; 4096]).await;

    let link = app.state.signer.generate_link("notes.txt", 3600);
    let req = http::Request::builder()
        .uri(link.path())
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_ENCODING), None);
    assert_eq!(response.header(header::CONTENT_LENGTH), Some("4096"));
    assert_eq!(response.bytes.len(), 4096);
}

#[tokio::test]
async fn test_json_listing_is_gzipped_on_request() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;
    for i in 0..20 {
        app.put_object(&format!("file-{i:02}.txt"), b"x").await;
    }

    let req = http::Request::builder()
        .uri("/api/r2/files")
        .header(header::COOKIE, &cookie)
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_ENCODING), Some("gzip"));
}
