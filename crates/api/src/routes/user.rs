//! Route definitions for the user resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST   /user           -> create
/// GET    /user/{id}      -> get_by_id
/// PUT    /user/{id}      -> update
/// DELETE /user/{id}      -> delete
/// GET    /users          -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(user::create))
        .route(
            "/user/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route("/users", get(user::list))
}
