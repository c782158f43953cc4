//! Repository for the `tasks` table.

use sqlx::SqliteConnection;
use todo_core::completion::Completion;
use todo_core::types::{DbId, Timestamp};

use crate::models::task::{CreateTask, Task, TaskWithRelations};
use crate::repositories::{CommentRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, completed, created_at, updated_at, \
    planned_complete_date, completed_at, project_id";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// The parent project must already exist; the foreign key rejects the
    /// insert otherwise.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateTask,
        now: Timestamp,
    ) -> Result<Task, sqlx::Error> {
        let completion = Completion::new(input.completed, now);
        let query = format!(
            "INSERT INTO tasks
                (name, completed, created_at, updated_at,
                 planned_complete_date, completed_at, project_id)
             VALUES ($1, $2, $3, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(completion.completed)
            .bind(now)
            .bind(input.planned_complete_date)
            .bind(completion.completed_at)
            .bind(input.project_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all tasks in id order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// List the tasks owned by a project, in id order.
    pub async fn list_by_project(
        conn: &mut SqliteConnection,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Write every mutable column of `task` back to its row.
    ///
    /// Returns `None` if no row with `task.id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        task: &Task,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = $1,
                completed = $2,
                updated_at = $3,
                planned_complete_date = $4,
                completed_at = $5
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&task.name)
            .bind(task.completed)
            .bind(task.updated_at)
            .bind(task.planned_complete_date)
            .bind(task.completed_at)
            .bind(task.id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    ///
    /// The task's comments and assignment rows go with it. Assigned users
    /// are untouched.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query("DELETE FROM comments WHERE task_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        sqlx::query("DELETE FROM task_assignees WHERE task_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Expand a task with its comments and assignees.
    pub async fn with_relations(
        conn: &mut SqliteConnection,
        task: Task,
    ) -> Result<TaskWithRelations, sqlx::Error> {
        let comments = CommentRepo::list_by_task(conn, task.id).await?;
        let assignees = UserRepo::list_assignees(conn, task.id).await?;
        Ok(TaskWithRelations {
            task,
            comments,
            assignees,
        })
    }

    /// List all tasks, each expanded with its comments and assignees.
    pub async fn list_with_relations(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<TaskWithRelations>, sqlx::Error> {
        let tasks = Self::list(conn).await?;
        let mut result = Vec::with_capacity(tasks.len());

        for task in tasks {
            result.push(Self::with_relations(conn, task).await?);
        }

        Ok(result)
    }
}
