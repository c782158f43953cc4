//! Request shape for the add/remove assignee endpoints.

use serde::Deserialize;
use todo_core::types::DbId;

/// Reference to an existing entity. Only `id` is read, every other field
/// the client sends along is ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EntityRef {
    pub id: DbId,
}

/// `{ "task": {...}, "user": {...} }`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AssignmentRequest {
    pub task: EntityRef,
    pub user: EntityRef,
}
