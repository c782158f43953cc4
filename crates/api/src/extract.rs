//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use todo_core::types::DbId;

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer means the route does not exist, so the
/// rejection is the router's plain-text 404 rather than a JSON envelope.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(EntityId(id)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Non-numeric id in path");
                Err(crate::routes::NOT_FOUND)
            }
        }
    }
}
