//! Shared field validation helpers.
//!
//! Lengths are counted in Unicode scalar values, not bytes, so a limit of
//! 300 admits 300 characters of any script.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a name or description column.
pub const MAX_NAME_LENGTH: usize = 255;

/// Reject an empty string with `"{label} can't be empty"`.
pub fn require_non_empty(value: &str, label: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{label} can't be empty")));
    }
    Ok(())
}

/// Reject a string longer than `max` characters.
pub fn validate_max_chars(value: &str, max: usize, label: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a required entity name: non-empty and at most [`MAX_NAME_LENGTH`].
pub fn validate_name(value: &str, label: &str) -> Result<(), CoreError> {
    require_non_empty(value, label)?;
    validate_max_chars(value, MAX_NAME_LENGTH, label)
}

/// A foreign key in a request body names a row that does not exist.
pub fn missing_reference(entity: &str, id: DbId) -> CoreError {
    CoreError::Validation(format!("{entity} with id {id} does not exist"))
}
