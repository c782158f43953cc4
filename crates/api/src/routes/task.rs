//! Route definitions for the task resource and its assignees.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assignment, task};
use crate::state::AppState;

/// ```text
/// POST   /task                   -> create
/// GET    /task/{id}              -> get_by_id
/// PUT    /task/{id}              -> update
/// DELETE /task/{id}              -> delete
/// POST   /task/add_assignee      -> assignment::add_assignee
/// POST   /task/remove_assignee   -> assignment::remove_assignee
/// GET    /tasks                  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/task", post(task::create))
        .route("/task/add_assignee", post(assignment::add_assignee))
        .route("/task/remove_assignee", post(assignment::remove_assignee))
        .route(
            "/task/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/tasks", get(task::list))
}
