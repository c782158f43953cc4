//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::completion::Completion;
use todo_core::error::CoreError;
use todo_core::project;
use todo_core::types::{DbId, Timestamp};

use crate::models::nullable;
use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub planned_complete_date: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

impl Project {
    pub fn completion(&self) -> Completion {
        Completion {
            completed: self.completed,
            completed_at: self.completed_at,
        }
    }

    /// Apply a partial update in memory. Only fields present in the input
    /// change, and `updated_at` is always bumped.
    pub fn apply(&mut self, input: &UpdateProject, now: Timestamp) -> Result<(), CoreError> {
        if let Some(name) = &input.name {
            project::validate_name(name)?;
            self.name = name.clone();
        }
        if let Some(description) = &input.description {
            if let Some(text) = description {
                project::validate_description(text)?;
            }
            self.description = description.clone();
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

/// A project together with its tasks. Tasks are not expanded further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub planned_complete_date: Option<Timestamp>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        project::validate_name(&self.name)?;
        if let Some(description) = &self.description {
            project::validate_description(description)?;
        }
        Ok(())
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// `description` and `planned_complete_date` are cleared by an explicit
/// `null` and left alone when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub planned_complete_date: Option<Option<Timestamp>>,
}
