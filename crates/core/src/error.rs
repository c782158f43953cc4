use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// Deletion blocked because the entity still owns children.
    #[error("{entity}s contains related {dependents}, unable to delete")]
    HasDependents {
        entity: &'static str,
        dependents: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Task",
            id: 7,
        };
        assert_eq!(err.to_string(), "Task with id 7 not found");
    }

    #[test]
    fn has_dependents_message_matches_api_contract() {
        let err = CoreError::HasDependents {
            entity: "Project",
            dependents: "tasks",
        };
        assert_eq!(
            err.to_string(),
            "Projects contains related tasks, unable to delete"
        );
    }
}
