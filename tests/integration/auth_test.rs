//! Integration tests for scope login, check and logout.

use http::{StatusCode, header};
use serde_json::json;

use crate::helpers::{FILES_PASSWORD, TestApp};

#[tokio::test]
async fn test_verify_sets_scope_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "password": FILES_PASSWORD, "scope": "files" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));

    let cookie = response.header(header::SET_COOKIE).unwrap();
    assert!(cookie.starts_with("auth-token-files="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_verify_marks_cookie_secure_in_production() {
    let app = TestApp::with_config(|c| c.environment = "production".into()).await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "password": FILES_PASSWORD, "scope": "files" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header(header::SET_COOKIE).unwrap().contains("; Secure"));
}

#[tokio::test]
async fn test_verify_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "password": "nope", "scope": "files" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), "Invalid password");
    assert_eq!(response.body["success"], json!(false));
    assert!(response.header(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_verify_missing_fields() {
    let app = TestApp::new().await;

    for body in [json!({ "scope": "files" }), json!({ "password": "", "scope": "files" })] {
        let response = app.request("POST", "/api/auth/verify", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), "Password and scope are required");
    }
}

#[tokio::test]
async fn test_verify_unknown_scope() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "password": "x", "scope": "admin" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid scope");
}

#[tokio::test]
async fn test_verify_unconfigured_scope_is_server_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/verify",
            Some(json!({ "password": "anything", "scope": "mamamiya" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), "Authentication is not configured");
}

#[tokio::test]
async fn test_check_reflects_cookie() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let response = app
        .request("GET", "/api/auth/check?scope=files", None, Some(&cookie))
        .await;
    assert_eq!(response.body, json!({ "authenticated": true }));

    let response = app.request("GET", "/api/auth/check?scope=files", None, None).await;
    assert_eq!(response.body, json!({ "authenticated": false }));
}

#[tokio::test]
async fn test_check_does_not_cross_scopes() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    // Present the files token under the other scope's cookie name.
    let value = cookie.trim_start_matches("auth-token-files=");
    let forged = format!("auth-token-mamamiya={value}");

    let response = app
        .request("GET", "/api/auth/check?scope=mamamiya", None, Some(&forged))
        .await;
    assert_eq!(response.body, json!({ "authenticated": false }));
}

#[tokio::test]
async fn test_check_unknown_or_missing_scope_is_false() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    for path in ["/api/auth/check?scope=admin", "/api/auth/check"] {
        let response = app.request("GET", path, None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "authenticated": false }));
    }
}

#[tokio::test]
async fn test_tampered_cookie_is_rejected() {
    let app = TestApp::new().await;
    let cookie = app.login_files().await;

    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app.request("GET", "/api/r2/files", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/logout", Some(json!({ "scope": "files" })), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.header(header::SET_COOKIE).unwrap();
    assert!(cookie.starts_with("auth-token-files=;"));
    assert!(cookie.contains("Max-Age=0"));
}
