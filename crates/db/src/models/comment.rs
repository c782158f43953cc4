//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A comment row from the `comments` table. Always encoded flat.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_id: DbId,
    pub task_id: DbId,
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub author_id: DbId,
    pub task_id: DbId,
}

/// DTO for editing a comment's content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComment {
    pub content: Option<String>,
}
