//! Repository for the `projects` table.

use sqlx::SqliteConnection;
use todo_core::completion::Completion;
use todo_core::types::{DbId, Timestamp};

use crate::models::project::{CreateProject, Project, ProjectWithTasks};
use crate::repositories::TaskRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, completed, created_at, updated_at, \
    planned_complete_date, completed_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to `now`. A project created
    /// already completed is stamped with `completed_at = now`.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateProject,
        now: Timestamp,
    ) -> Result<Project, sqlx::Error> {
        let completion = Completion::new(input.completed, now);
        let query = format!(
            "INSERT INTO projects
                (name, description, completed, created_at, updated_at,
                 planned_complete_date, completed_at)
             VALUES ($1, $2, $3, $4, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(completion.completed)
            .bind(now)
            .bind(input.planned_complete_date)
            .bind(completion.completed_at)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all projects in id order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Write every mutable column of `project` back to its row.
    ///
    /// Returns `None` if no row with `project.id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        project: &Project,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $1,
                description = $2,
                completed = $3,
                updated_at = $4,
                planned_complete_date = $5,
                completed_at = $6
             WHERE id = $7
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.completed)
            .bind(project.updated_at)
            .bind(project.planned_complete_date)
            .bind(project.completed_at)
            .bind(project.id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Callers check [`ProjectRepo::count_tasks`] first; the foreign key on
    /// `tasks.project_id` rejects the delete otherwise.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of tasks the project currently owns.
    pub async fn count_tasks(conn: &mut SqliteConnection, id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Expand a project with its (flat) tasks.
    pub async fn with_tasks(
        conn: &mut SqliteConnection,
        project: Project,
    ) -> Result<ProjectWithTasks, sqlx::Error> {
        let tasks = TaskRepo::list_by_project(conn, project.id).await?;
        Ok(ProjectWithTasks { project, tasks })
    }

    /// List all projects, each expanded with its tasks.
    pub async fn list_with_tasks(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ProjectWithTasks>, sqlx::Error> {
        let projects = Self::list(conn).await?;
        let mut result = Vec::with_capacity(projects.len());

        for project in projects {
            result.push(Self::with_tasks(conn, project).await?);
        }

        Ok(result)
    }
}
