//! Handlers for the task resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sqlx::SqliteConnection;
use todo_core::types::DbId;
use todo_core::validation::missing_reference;
use todo_core::{project, task};
use todo_db::models::task::{CreateTask, Task, TaskWithRelations, UpdateTask};
use todo_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult, During, OperationResult};
use crate::extract::EntityId;
use crate::operation::Operation;
use crate::response::Envelope;
use crate::state::AppState;

/// Load a task or fail with `NotFound`.
pub(crate) async fn find_task(conn: &mut SqliteConnection, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::not_found(task::ENTITY, id))
}

/// POST /api/task
///
/// The parent project must exist. An unknown `project_id` is a 400
/// validation failure, not a 404.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTask>, JsonRejection>,
) -> OperationResult<Envelope<TaskWithRelations>> {
    let op = Operation::AddTask;
    let Json(input) = payload.during(op)?;
    input.validate().during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<TaskWithRelations> = async {
        if ProjectRepo::find_by_id(&mut tx, input.project_id)
            .await?
            .is_none()
        {
            return Err(missing_reference(project::ENTITY, input.project_id).into());
        }
        let created = TaskRepo::create(&mut tx, &input, Utc::now()).await?;
        Ok(TaskRepo::with_relations(&mut tx, created).await?)
    }
    .await;
    let created = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(
        task_id = created.task.id,
        project_id = created.task.project_id,
        "Task added"
    );
    Ok(Envelope::success(op, created))
}

/// GET /api/tasks
pub async fn list(
    State(state): State<AppState>,
) -> OperationResult<Envelope<Vec<TaskWithRelations>>> {
    let op = Operation::ListTasks;
    let mut conn = state.pool.acquire().await.during(op)?;
    let tasks = TaskRepo::list_with_relations(&mut conn).await.during(op)?;
    Ok(Envelope::success(op, tasks))
}

/// GET /api/task/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<TaskWithRelations>> {
    let op = Operation::GetTask;
    let mut conn = state.pool.acquire().await.during(op)?;
    let found = find_task(&mut conn, id).await.during(op)?;
    let found = TaskRepo::with_relations(&mut conn, found)
        .await
        .during(op)?;
    Ok(Envelope::success(op, found))
}

/// PUT /api/task/{id}
///
/// Partial update. `completed` goes through the completion-transition rule.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> OperationResult<Envelope<TaskWithRelations>> {
    let op = Operation::UpdateTask;
    let Json(input) = payload.during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<TaskWithRelations> = async {
        let mut current = find_task(&mut tx, id).await?;
        current.apply(&input, Utc::now())?;
        let updated = TaskRepo::update(&mut tx, &current)
            .await?
            .ok_or(AppError::not_found(task::ENTITY, id))?;
        Ok(TaskRepo::with_relations(&mut tx, updated).await?)
    }
    .await;
    let updated = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(task_id = id, completed = updated.task.completed, "Task updated");
    Ok(Envelope::success(op, updated))
}

/// DELETE /api/task/{id}
///
/// No dependent guard: comments and assignment rows are removed with the task.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<()>> {
    let op = Operation::DeleteTask;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<()> = async {
        find_task(&mut tx, id).await?;
        TaskRepo::delete(&mut tx, id).await?;
        Ok(())
    }
    .await;
    todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(task_id = id, "Task deleted");
    Ok(Envelope::ok(op))
}
