pub mod comment;
pub mod project;
pub mod sanity;
pub mod task;
pub mod user;

use axum::http::StatusCode;
use axum::Router;

use crate::state::AppState;

/// Plain-text 404 used for unknown routes and unroutable path parameters.
pub const NOT_FOUND: (StatusCode, &str) = (StatusCode::NOT_FOUND, "Not Found");

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sanity                       liveness probe (GET)
///
/// /project                      create (POST)
/// /project/{id}                 get, update, delete
/// /projects                     list (GET)
///
/// /task                         create (POST)
/// /task/{id}                    get, update, delete
/// /task/add_assignee            assign a user (POST)
/// /task/remove_assignee         unassign a user (POST)
/// /tasks                        list (GET)
///
/// /user                         create (POST)
/// /user/{id}                    get, update, delete
/// /users                        list (GET)
///
/// /comment                      create (POST)
/// /comment/{id}                 get, update, delete
/// /comments                     list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(sanity::router())
        .merge(project::router())
        .merge(task::router())
        .merge(user::router())
        .merge(comment::router())
}

/// Fallback for any route that does not exist.
pub async fn not_found() -> (StatusCode, &'static str) {
    NOT_FOUND
}
