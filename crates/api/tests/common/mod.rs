//! Shared helpers for API integration tests.
//!
//! Builds the app in fallback mode (no database, no object store), which
//! exercises the same router and middleware stack production uses without
//! needing external services.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atelier_api::auth::session::SessionStore;
use atelier_api::config::{AdminCredentials, ServerConfig};
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_gallery::GalleryService;

/// Credentials configured into the test app.
pub const TEST_ADMIN_NAME: &str = "divya";
pub const TEST_ADMIN_PASSCODE: &str = "henna-and-ink";

/// Build a test `ServerConfig` with safe defaults and the test admin
/// credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 20 * 1024 * 1024,
        admin: Some(AdminCredentials {
            name: TEST_ADMIN_NAME.to_string(),
            passcode: TEST_ADMIN_PASSCODE.to_string(),
        }),
    }
}

/// Build the full application router in fallback mode with all middleware
/// layers, mirroring the construction in `main.rs`.
pub fn build_fallback_app() -> Router {
    build_fallback_app_with_config(test_config())
}

/// Same as [`build_fallback_app`], with a custom config (e.g. no admin
/// credentials).
pub fn build_fallback_app_with_config(config: ServerConfig) -> Router {
    let state = AppState {
        gallery: Arc::new(GalleryService::fallback()),
        config: Arc::new(config.clone()),
        sessions: Arc::new(SessionStore::new()),
    };
    build_app_router(state, &config)
}

/// Issue a request against the app without consuming it.
pub async fn request(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("request failed")
}

/// GET helper.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    request(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// POST helper with a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Log in with the test credentials and return the session token.
pub async fn login(app: &Router) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "name": TEST_ADMIN_NAME, "password": TEST_ADMIN_PASSCODE }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["data"]["token"]
        .as_str()
        .expect("login response has a token")
        .to_string()
}

/// A minimal multipart body for the upload endpoint.
pub fn multipart_upload_body(
    boundary: &str,
    file_name: &str,
    title: &str,
    category: &str,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&[0x89, b'P', b'N', b'G']);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\n\
             Content-Disposition: form-data; name=\"title\"\r\n\r\n\
             {title}\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"category\"\r\n\r\n\
             {category}\r\n\
             --{boundary}--\r\n"
        )
        .as_bytes(),
    );
    body
}
