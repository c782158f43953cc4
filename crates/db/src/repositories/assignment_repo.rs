//! Repository for the `task_assignees` join table.

use sqlx::SqliteConnection;
use todo_core::types::DbId;

/// Provides the task/user assignment operations.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// IDs of the users currently assigned to a task.
    pub async fn assignee_ids(
        conn: &mut SqliteConnection,
        task_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT user_id FROM task_assignees WHERE task_id = $1 ORDER BY user_id")
                .bind(task_id)
                .fetch_all(&mut *conn)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Link a user to a task. Returns `false` if the link already existed,
    /// in which case nothing was written.
    pub async fn assign(
        conn: &mut SqliteConnection,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO task_assignees (task_id, user_id) VALUES ($1, $2)
             ON CONFLICT (task_id, user_id) DO NOTHING",
        )
        .bind(task_id)
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink a user from a task. Absent links are ignored.
    pub async fn unassign(
        conn: &mut SqliteConnection,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM task_assignees WHERE task_id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
