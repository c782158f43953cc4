//! Route definitions for the project resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// POST   /project           -> create
/// GET    /project/{id}      -> get_by_id
/// PUT    /project/{id}      -> update
/// DELETE /project/{id}      -> delete
/// GET    /projects          -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project", post(project::create))
        .route(
            "/project/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/projects", get(project::list))
}
