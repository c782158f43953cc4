//! Repository for the `comments` table.

use sqlx::SqliteConnection;
use todo_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, created_at, updated_at, author_id, task_id";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateComment,
        now: Timestamp,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (content, created_at, updated_at, author_id, task_id)
             VALUES ($1, $2, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.content)
            .bind(now)
            .bind(input.author_id)
            .bind(input.task_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all comments in id order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id");
        sqlx::query_as::<_, Comment>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// List the comments on a task, oldest first.
    pub async fn list_by_task(
        conn: &mut SqliteConnection,
        task_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE task_id = $1 ORDER BY id");
        sqlx::query_as::<_, Comment>(&query)
            .bind(task_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Replace a comment's content. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        content: &str,
        now: Timestamp,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $1, updated_at = $2 WHERE id = $3 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(content)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
