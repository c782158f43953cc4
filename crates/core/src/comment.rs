//! Comment content rules.

use crate::error::CoreError;
use crate::validation;

/// Entity label used in error messages.
pub const ENTITY: &str = "Comment";

/// Maximum comment length in characters.
pub const MAX_CONTENT_LENGTH: usize = 300;

pub fn validate_content(content: &str) -> Result<(), CoreError> {
    validation::require_non_empty(content, "Comment content")?;
    validation::validate_max_chars(content, MAX_CONTENT_LENGTH, "Comment content")
}
