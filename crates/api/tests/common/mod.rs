//! Shared harness for HTTP-level integration tests.
//!
//! Builds the application through the same [`build_app_router`] the binary
//! uses, so tests exercise the full middleware stack (admin gate, CORS,
//! request ID, timeout, panic recovery).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_session_token, SessionConfig};
use folio_api::cache::PageCache;
use folio_api::config::{AdminConfig, ServerConfig};
use folio_api::middleware::auth::SESSION_COOKIE;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::storage::local::LocalStorage;

/// The credential pair the test admin logs in with.
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Build a test `ServerConfig` with safe defaults and a known admin
/// identity. `uploads_dir` receives local uploads.
pub fn test_config(uploads_dir: std::path::PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        admin: AdminConfig {
            email: TEST_ADMIN_EMAIL.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
        session: SessionConfig {
            secret: "integration-test-secret-with-enough-entropy".to_string(),
            expiry_hours: 24,
        },
        uploads_dir,
        blob: None,
    }
}

/// Build the full application router against the given pool, with local
/// upload storage rooted in a fresh temp directory.
///
/// The returned [`TempDir`] must be kept alive for the duration of the
/// test; dropping it deletes the uploads directory.
pub fn build_test_app(pool: PgPool) -> (Router, TempDir) {
    let uploads = tempfile::tempdir().expect("tempdir should succeed");
    let config = test_config(uploads.path().join("uploads"));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(LocalStorage::new(config.uploads_dir.clone())),
        page_cache: PageCache::new(),
    };

    (build_app_router(state, &config), uploads)
}

/// A `Cookie` header value carrying a freshly signed admin session.
pub fn session_cookie() -> String {
    let config = test_config(std::env::temp_dir());
    let token = generate_session_token(&config.session).expect("token generation should succeed");
    format!("{SESSION_COOKIE}={token}")
}

// ---------------------------------------------------------------------------
// Request helpers (tower::oneshot against the in-memory router)
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw body with an explicit content type.
pub async fn post_raw(app: Router, path: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a urlencoded form, optionally with a session cookie.
pub async fn send_form(
    app: Router,
    method: Method,
    path: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).expect("form encoding should succeed");
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn post_form(app: Router, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
    send_form(app, Method::POST, path, fields, None).await
}

pub async fn post_form_auth(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
    cookie: &str,
) -> Response<Body> {
    send_form(app, Method::POST, path, fields, Some(cookie)).await
}

pub async fn put_form_auth(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
    cookie: &str,
) -> Response<Body> {
    send_form(app, Method::PUT, path, fields, Some(cookie)).await
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch_auth(app: Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
