use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::error::CoreError;
use todo_core::types::DbId;

use crate::operation::Operation;
use crate::response::Envelope;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the failure sources that
/// only exist at the HTTP and storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

/// Convenience type alias for fallible handler internals.
pub type AppResult<T> = Result<T, AppError>;

/// An [`AppError`] tagged with the operation it interrupted.
///
/// This is what handlers return. The operation supplies the generic failure
/// message for causes that must not be shown to clients.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {source}")]
pub struct OperationError {
    pub operation: Operation,
    pub source: AppError,
}

/// Handler return type.
pub type OperationResult<T> = Result<T, OperationError>;

/// Attach an [`Operation`] to any error convertible into [`AppError`].
pub trait During<T> {
    fn during(self, operation: Operation) -> OperationResult<T>;
}

impl<T, E> During<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn during(self, operation: Operation) -> OperationResult<T> {
        self.map_err(|err| OperationError {
            operation,
            source: err.into(),
        })
    }
}

impl OperationError {
    /// HTTP status and client-facing message for this failure.
    ///
    /// Domain errors carry their own message. Everything else is logged and
    /// replaced by the operation's generic message.
    pub fn classify(&self) -> (StatusCode, String) {
        let operation = self.operation;
        match &self.source {
            AppError::Core(err @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Core(
                err @ (CoreError::Validation(_)
                | CoreError::Conflict(_)
                | CoreError::HasDependents { .. }),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(%operation, error = %msg, "Internal core error");
                generic(operation)
            }
            AppError::Database(err) => {
                tracing::error!(%operation, error = %err, "Database error");
                generic(operation)
            }
            AppError::MalformedBody(rejection) => {
                tracing::warn!(%operation, error = %rejection, "Rejected request body");
                generic(operation)
            }
        }
    }
}

fn generic(operation: Operation) -> (StatusCode, String) {
    (
        StatusCode::BAD_REQUEST,
        operation.failure_message().to_string(),
    )
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        (status, Envelope::fail(message)).into_response()
    }
}
