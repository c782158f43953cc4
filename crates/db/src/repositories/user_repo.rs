//! Repository for the `users` table.

use sqlx::SqliteConnection;
use todo_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a user by its internal ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all users in id order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// List the users assigned to a task, in user id order.
    pub async fn list_assignees(
        conn: &mut SqliteConnection,
        task_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name FROM users u
             JOIN task_assignees ta ON ta.user_id = u.id
             WHERE ta.task_id = $1
             ORDER BY u.id",
        )
        .bind(task_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Rename a user. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        name: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET name = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    ///
    /// Comments the user authored and their assignment rows go with them.
    /// Tasks they were assigned to are untouched.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query("DELETE FROM comments WHERE author_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        sqlx::query("DELETE FROM task_assignees WHERE user_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
