//! Task validation and the assignment guard.

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation;

/// Entity label used in error messages.
pub const ENTITY: &str = "Task";

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validation::validate_name(name, "Task name")
}

/// Adding a user who is already an assignee is a conflict. The caller checks
/// membership before inserting. Removal has no such check.
pub fn ensure_not_assigned(user_id: DbId, assignee_ids: &[DbId]) -> Result<(), CoreError> {
    if assignee_ids.contains(&user_id) {
        return Err(already_assigned());
    }
    Ok(())
}

/// The conflict reported for a duplicate assignment.
pub fn already_assigned() -> CoreError {
    CoreError::Conflict("User is already assigned to this task".to_string())
}
