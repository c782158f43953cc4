//! HTTP-level integration tests for the comment endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, create_task, create_user, delete, get, post_json, put_json,
};
use serde_json::json;
use sqlx::SqlitePool;

/// A project, a task under it, and a user, returned as `(task_id, user_id)`.
async fn seed(pool: &SqlitePool) -> (i64, i64) {
    let project_id = create_project(pool, "Parent").await;
    let task_id = create_task(pool, project_id, "Discuss").await;
    let user_id = create_user(pool, "Ada").await;
    (task_id, user_id)
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_comment_shows_up_on_its_task(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "First!", "author_id": user_id, "task_id": task_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Comment added");
    assert_eq!(json["comment"]["content"], "First!");
    assert_eq!(json["comment"]["author_id"], user_id);
    assert_eq!(json["comment"]["task_id"], task_id);
    assert!(json["comment"]["created_at"].is_string());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/task/{task_id}")).await).await;
    let comments = json["task"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "First!");
}

#[sqlx::test(migrations = "../../migrations")]
async fn comment_content_limit_is_300_characters(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "a".repeat(300), "author_id": user_id, "task_id": task_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "a".repeat(301), "author_id": user_id, "task_id": task_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert!(json["message"].as_str().unwrap().contains("300"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_comment_is_rejected(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "", "author_id": user_id, "task_id": task_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Comment content can't be empty");
}

#[sqlx::test(migrations = "../../migrations")]
async fn comment_with_unknown_author_or_task_returns_400(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "hi", "author_id": 99, "task_id": task_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "User with id 99 does not exist");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/comment",
        json!({"content": "hi", "author_id": user_id, "task_id": 77}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Task with id 77 does not exist");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_list_and_delete_comment(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/comment",
            json!({"content": "draft", "author_id": user_id, "task_id": task_id}),
        )
        .await,
    )
    .await;
    let id = json["comment"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/comment/{id}"), json!({"content": "final"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Comment updated");
    assert_eq!(json["comment"]["content"], "final");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/comments").await).await;
    assert_eq!(json["message"], "Comments found");
    assert_eq!(json["comments"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/comment/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/comment/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        format!("Comment with id {id} not found")
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_author_removes_their_comments(pool: SqlitePool) {
    let (task_id, user_id) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/comment",
        json!({"content": "bye", "author_id": user_id, "task_id": task_id}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/user/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/task/{task_id}")).await).await;
    assert_eq!(json["task"]["comments"], json!([]));
}
