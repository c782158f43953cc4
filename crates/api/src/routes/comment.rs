//! Route definitions for the comment resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// ```text
/// POST   /comment           -> create
/// GET    /comment/{id}      -> get_by_id
/// PUT    /comment/{id}      -> update
/// DELETE /comment/{id}      -> delete
/// GET    /comments          -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comment", post(comment::create))
        .route(
            "/comment/{id}",
            get(comment::get_by_id)
                .put(comment::update)
                .delete(comment::delete),
        )
        .route("/comments", get(comment::list))
}
