//! Project validation and the deletion guard.

use crate::error::CoreError;
use crate::validation;

/// Entity label used in error messages.
pub const ENTITY: &str = "Project";

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validation::validate_name(name, "Project name")
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validation::validate_max_chars(description, validation::MAX_NAME_LENGTH, "Project description")
}

/// A project may only be deleted once it owns no tasks. Deletion is blocked,
/// never cascaded.
pub fn ensure_deletable(task_count: i64) -> Result<(), CoreError> {
    if task_count > 0 {
        return Err(CoreError::HasDependents {
            entity: ENTITY,
            dependents: "tasks",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_name("").unwrap_err();
        assert_eq!(err.to_string(), "Project name can't be empty");
    }

    #[test]
    fn long_description_is_rejected() {
        assert!(validate_description(&"d".repeat(255)).is_ok());
        assert!(validate_description(&"d".repeat(256)).is_err());
    }

    #[test]
    fn project_without_tasks_is_deletable() {
        assert!(ensure_deletable(0).is_ok());
    }

    #[test]
    fn project_with_tasks_is_guarded() {
        let err = ensure_deletable(3).unwrap_err();
        assert_matches!(
            err,
            CoreError::HasDependents {
                entity: "Project",
                dependents: "tasks"
            }
        );
        assert!(err.to_string().contains("related tasks"));
    }
}
