use crate::error::CoreError;
use crate::validation;

/// Entity label used in error messages.
pub const ENTITY: &str = "User";

/// An empty name is rejected explicitly. A missing name never gets here,
/// it fails when the request body is decoded.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validation::validate_name(name, "User name")
}
