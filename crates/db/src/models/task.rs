//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::completion::Completion;
use todo_core::error::CoreError;
use todo_core::task;
use todo_core::types::{DbId, Timestamp};

use crate::models::comment::Comment;
use crate::models::nullable;
use crate::models::user::User;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub planned_complete_date: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub project_id: DbId,
}

impl Task {
    pub fn completion(&self) -> Completion {
        Completion {
            completed: self.completed,
            completed_at: self.completed_at,
        }
    }

    /// Apply a partial update in memory. Only fields present in the input
    /// change, and `updated_at` is always bumped.
    pub fn apply(&mut self, input: &UpdateTask, now: Timestamp) -> Result<(), CoreError> {
        if let Some(name) = &input.name {
            task::validate_name(name)?;
            self.name = name.clone();
        }
        if let Some(planned) = input.planned_complete_date {
            self.planned_complete_date = planned;
        }
        if let Some(completed) = input.completed {
            let mut completion = self.completion();
            completion.set(completed, now);
            self.completed = completion.completed;
            self.completed_at = completion.completed_at;
        }
        self.updated_at = now;
        Ok(())
    }
}

/// A task together with its comments and assignees, both flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWithRelations {
    #[serde(flatten)]
    pub task: Task,
    pub comments: Vec<Comment>,
    pub assignees: Vec<User>,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub name: String,
    pub project_id: DbId,
    #[serde(default)]
    pub completed: bool,
    pub planned_complete_date: Option<Timestamp>,
}

impl CreateTask {
    pub fn validate(&self) -> Result<(), CoreError> {
        task::validate_name(&self.name)
    }
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub completed: Option<bool>,
    /// `null` clears the date; absent leaves it unchanged.
    #[serde(default, deserialize_with = "nullable")]
    pub planned_complete_date: Option<Option<Timestamp>>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_requires_project_id() {
        assert!(serde_json::from_value::<CreateTask>(json!({"name": "T"})).is_err());
        assert!(
            serde_json::from_value::<CreateTask>(json!({"name": "T", "project_id": "one"}))
                .is_err()
        );
        let input: CreateTask =
            serde_json::from_value(json!({"name": "T", "project_id": 1})).unwrap();
        assert_eq!(input.project_id, 1);
    }

    #[test]
    fn update_null_date_clears_it() {
        let input: UpdateTask =
            serde_json::from_value(json!({"planned_complete_date": null})).unwrap();
        assert_eq!(input.planned_complete_date, Some(None));

        let input: UpdateTask = serde_json::from_value(json!({"completed": true})).unwrap();
        assert_eq!(input.planned_complete_date, None);
    }

    #[test]
    fn relations_encode_as_nested_lists() {
        let now = Utc::now();
        let view = TaskWithRelations {
            task: Task {
                id: 3,
                name: "T".to_string(),
                completed: false,
                created_at: now,
                updated_at: now,
                planned_complete_date: None,
                completed_at: None,
                project_id: 1,
            },
            comments: Vec::new(),
            assignees: vec![User {
                id: 9,
                name: "Ada".to_string(),
            }],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["project_id"], 1);
        assert_eq!(json["comments"], json!([]));
        assert_eq!(json["assignees"][0]["name"], "Ada");

        let decoded: TaskWithRelations = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, view);
    }
}
