//! Handlers for the project resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sqlx::SqliteConnection;
use todo_core::project::{ensure_deletable, ENTITY};
use todo_core::types::DbId;
use todo_db::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use todo_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult, During, OperationResult};
use crate::extract::EntityId;
use crate::operation::Operation;
use crate::response::Envelope;
use crate::state::AppState;

/// Load a project or fail with `NotFound`.
pub(crate) async fn find_project(conn: &mut SqliteConnection, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// POST /api/project
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> OperationResult<Envelope<ProjectWithTasks>> {
    let op = Operation::AddProject;
    let Json(input) = payload.during(op)?;
    input.validate().during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<ProjectWithTasks> = async {
        let project = ProjectRepo::create(&mut tx, &input, Utc::now()).await?;
        Ok(ProjectRepo::with_tasks(&mut tx, project).await?)
    }
    .await;
    let project = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(project_id = project.project.id, "Project added");
    Ok(Envelope::success(op, project))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
) -> OperationResult<Envelope<Vec<ProjectWithTasks>>> {
    let op = Operation::ListProjects;
    let mut conn = state.pool.acquire().await.during(op)?;
    let projects = ProjectRepo::list_with_tasks(&mut conn).await.during(op)?;
    Ok(Envelope::success(op, projects))
}

/// GET /api/project/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<ProjectWithTasks>> {
    let op = Operation::GetProject;
    let mut conn = state.pool.acquire().await.during(op)?;
    let project = find_project(&mut conn, id).await.during(op)?;
    let project = ProjectRepo::with_tasks(&mut conn, project)
        .await
        .during(op)?;
    Ok(Envelope::success(op, project))
}

/// PUT /api/project/{id}
///
/// Partial update. `completed` goes through the completion-transition rule.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    payload: Result<Json<UpdateProject>, JsonRejection>,
) -> OperationResult<Envelope<ProjectWithTasks>> {
    let op = Operation::UpdateProject;
    let Json(input) = payload.during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<ProjectWithTasks> = async {
        let mut project = find_project(&mut tx, id).await?;
        project.apply(&input, Utc::now())?;
        let project = ProjectRepo::update(&mut tx, &project)
            .await?
            .ok_or(AppError::not_found(ENTITY, id))?;
        Ok(ProjectRepo::with_tasks(&mut tx, project).await?)
    }
    .await;
    let project = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(
        project_id = id,
        completed = project.project.completed,
        "Project updated"
    );
    Ok(Envelope::success(op, project))
}

/// DELETE /api/project/{id}
///
/// Refused while the project still owns tasks.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<()>> {
    let op = Operation::DeleteProject;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<()> = async {
        find_project(&mut tx, id).await?;
        let task_count = ProjectRepo::count_tasks(&mut tx, id).await?;
        ensure_deletable(task_count)?;
        ProjectRepo::delete(&mut tx, id).await?;
        Ok(())
    }
    .await;
    todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(project_id = id, "Project deleted");
    Ok(Envelope::ok(op))
}
