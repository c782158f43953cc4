//! Integration tests for the sanity endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, get};
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /api/sanity returns the fixed message
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sanity_returns_fixed_message(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/sanity").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({"status": "success", "message": "This is JSON from the backend!"})
    );
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns a plain-text 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_route_returns_plain_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not Found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn non_numeric_id_returns_plain_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/project/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not Found");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/sanity").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn cors_preflight_returns_correct_headers(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PUT"),
        "Allow-Methods should contain PUT, got: {allow_methods}"
    );
}
