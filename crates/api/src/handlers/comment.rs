//! Handlers for the comment resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sqlx::SqliteConnection;
use todo_core::comment::{validate_content, ENTITY};
use todo_core::types::DbId;
use todo_core::validation::missing_reference;
use todo_core::{task, user};
use todo_db::models::comment::{Comment, CreateComment, UpdateComment};
use todo_db::repositories::{CommentRepo, TaskRepo, UserRepo};

use crate::error::{AppError, AppResult, During, OperationResult};
use crate::extract::EntityId;
use crate::operation::Operation;
use crate::response::Envelope;
use crate::state::AppState;

/// Load a comment or fail with `NotFound`.
pub(crate) async fn find_comment(conn: &mut SqliteConnection, id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// POST /api/comment
///
/// Both the author and the task must exist; either missing is a 400.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateComment>, JsonRejection>,
) -> OperationResult<Envelope<Comment>> {
    let op = Operation::AddComment;
    let Json(input) = payload.during(op)?;
    validate_content(&input.content).during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<Comment> = async {
        if UserRepo::find_by_id(&mut tx, input.author_id).await?.is_none() {
            return Err(missing_reference(user::ENTITY, input.author_id).into());
        }
        if TaskRepo::find_by_id(&mut tx, input.task_id).await?.is_none() {
            return Err(missing_reference(task::ENTITY, input.task_id).into());
        }
        Ok(CommentRepo::create(&mut tx, &input, Utc::now()).await?)
    }
    .await;
    let comment = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(
        comment_id = comment.id,
        task_id = comment.task_id,
        author_id = comment.author_id,
        "Comment added"
    );
    Ok(Envelope::success(op, comment))
}

/// GET /api/comments
pub async fn list(State(state): State<AppState>) -> OperationResult<Envelope<Vec<Comment>>> {
    let op = Operation::ListComments;
    let mut conn = state.pool.acquire().await.during(op)?;
    let comments = CommentRepo::list(&mut conn).await.during(op)?;
    Ok(Envelope::success(op, comments))
}

/// GET /api/comment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<Comment>> {
    let op = Operation::GetComment;
    let mut conn = state.pool.acquire().await.during(op)?;
    let comment = find_comment(&mut conn, id).await.during(op)?;
    Ok(Envelope::success(op, comment))
}

/// PUT /api/comment/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    payload: Result<Json<UpdateComment>, JsonRejection>,
) -> OperationResult<Envelope<Comment>> {
    let op = Operation::UpdateComment;
    let Json(input) = payload.during(op)?;
    if let Some(content) = &input.content {
        validate_content(content).during(op)?;
    }

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<Comment> = async {
        let comment = find_comment(&mut tx, id).await?;
        match &input.content {
            Some(content) => CommentRepo::update(&mut tx, id, content, Utc::now())
                .await?
                .ok_or(AppError::not_found(ENTITY, id)),
            None => Ok(comment),
        }
    }
    .await;
    let comment = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(comment_id = id, "Comment updated");
    Ok(Envelope::success(op, comment))
}

/// DELETE /api/comment/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<()>> {
    let op = Operation::DeleteComment;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<()> = async {
        find_comment(&mut tx, id).await?;
        CommentRepo::delete(&mut tx, id).await?;
        Ok(())
    }
    .await;
    todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(comment_id = id, "Comment deleted");
    Ok(Envelope::ok(op))
}
