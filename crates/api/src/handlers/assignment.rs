//! Handlers for adding and removing task assignees.
//!
//! Both take `{ "task": {...}, "user": {...} }` and read only the two `id`
//! fields. Each runs its read-then-write in a single transaction; the join
//! table's primary key settles any race between concurrent adds.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use todo_core::task::{already_assigned, ensure_not_assigned};
use todo_db::models::assignment::AssignmentRequest;
use todo_db::models::task::TaskWithRelations;
use todo_db::repositories::{AssignmentRepo, TaskRepo};

use crate::error::{AppResult, During, OperationResult};
use crate::handlers::task::find_task;
use crate::handlers::user::find_user;
use crate::operation::Operation;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/task/add_assignee
///
/// Assigning a user twice is a conflict (400).
pub async fn add_assignee(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> OperationResult<Envelope<TaskWithRelations>> {
    let op = Operation::AddAssignee;
    let Json(AssignmentRequest { task, user }) = payload.during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<TaskWithRelations> = async {
        let found = find_task(&mut tx, task.id).await?;
        find_user(&mut tx, user.id).await?;

        let assignee_ids = AssignmentRepo::assignee_ids(&mut tx, found.id).await?;
        ensure_not_assigned(user.id, &assignee_ids)?;
        if !AssignmentRepo::assign(&mut tx, found.id, user.id).await? {
            return Err(already_assigned().into());
        }

        Ok(TaskRepo::with_relations(&mut tx, found).await?)
    }
    .await;
    let updated = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(task_id = task.id, user_id = user.id, "Assignee added");
    Ok(Envelope::success(op, updated))
}

/// POST /api/task/remove_assignee
///
/// Removing a user who is not assigned succeeds and leaves the list as is.
pub async fn remove_assignee(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> OperationResult<Envelope<TaskWithRelations>> {
    let op = Operation::RemoveAssignee;
    let Json(AssignmentRequest { task, user }) = payload.during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<TaskWithRelations> = async {
        let found = find_task(&mut tx, task.id).await?;
        find_user(&mut tx, user.id).await?;
        AssignmentRepo::unassign(&mut tx, found.id, user.id).await?;
        Ok(TaskRepo::with_relations(&mut tx, found).await?)
    }
    .await;
    let updated = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(task_id = task.id, user_id = user.id, "Assignee removed");
    Ok(Envelope::success(op, updated))
}
