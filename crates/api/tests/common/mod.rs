#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
    }
}

/// Build the full application router around the given pool.
///
/// Goes through the same `build_app_router` as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// POST a raw body with a JSON content type, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its id.
pub async fn create_project(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/project",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["project"]["id"].as_i64().unwrap()
}

/// Create a task under `project_id` and return its id.
pub async fn create_task(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/task",
        serde_json::json!({"name": name, "project_id": project_id}),
    )
    .await;
    body_json(response).await["task"]["id"].as_i64().unwrap()
}

/// Create a user and return its id.
pub async fn create_user(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/user",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["user"]["id"].as_i64().unwrap()
}
