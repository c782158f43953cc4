//! The operations the API exposes, with their fixed envelope messages.
//!
//! Every handler runs as exactly one [`Operation`]. The operation decides
//! the success message, the JSON key its payload sits under, and the generic
//! message clients see when something unexpected goes wrong.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddProject,
    GetProject,
    UpdateProject,
    DeleteProject,
    ListProjects,
    AddTask,
    GetTask,
    UpdateTask,
    DeleteTask,
    ListTasks,
    AddUser,
    GetUser,
    UpdateUser,
    DeleteUser,
    ListUsers,
    AddComment,
    GetComment,
    UpdateComment,
    DeleteComment,
    ListComments,
    AddAssignee,
    RemoveAssignee,
}

/// Static strings attached to an operation.
struct Messages {
    success: &'static str,
    failure: &'static str,
    key: &'static str,
}

impl Operation {
    /// Message sent with a `success` envelope.
    pub fn success_message(self) -> &'static str {
        self.messages().success
    }

    /// Generic message sent with a `fail` envelope when the cause must not
    /// reach the client.
    pub fn failure_message(self) -> &'static str {
        self.messages().failure
    }

    /// JSON key the payload is placed under.
    pub fn payload_key(self) -> &'static str {
        self.messages().key
    }

    fn messages(self) -> Messages {
        use Operation::*;

        let (success, failure, key) = match self {
            AddProject => ("Project added", "Failed to add project", "project"),
            GetProject => ("Project found", "Failed to get project", "project"),
            UpdateProject => ("Project updated", "Failed to update project", "project"),
            DeleteProject => ("Project deleted", "Failed to delete project", "project"),
            ListProjects => ("Projects found", "Failed to list projects", "projects"),
            AddTask => ("Task added", "Failed to add task", "task"),
            GetTask => ("Task found", "Failed to get task", "task"),
            UpdateTask => ("Task updated", "Failed to update task", "task"),
            DeleteTask => ("Task deleted", "Failed to delete task", "task"),
            ListTasks => ("Tasks found", "Failed to list tasks", "tasks"),
            AddUser => ("User added", "Failed to add user", "user"),
            GetUser => ("User found", "Failed to get user", "user"),
            UpdateUser => ("User updated", "Failed to update user", "user"),
            DeleteUser => ("User deleted", "Failed to delete user", "user"),
            ListUsers => ("Users found", "Failed to list users", "users"),
            AddComment => ("Comment added", "Failed to add comment", "comment"),
            GetComment => ("Comment found", "Failed to get comment", "comment"),
            UpdateComment => ("Comment updated", "Failed to update comment", "comment"),
            DeleteComment => ("Comment deleted", "Failed to delete comment", "comment"),
            ListComments => ("Comments found", "Failed to list comments", "comments"),
            AddAssignee => ("Assignee added", "Failed to add assignee", "task"),
            RemoveAssignee => ("Assignee removed", "Failed to remove assignee", "task"),
        };

        Messages {
            success,
            failure,
            key,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_operations_use_plural_keys() {
        assert_eq!(Operation::ListProjects.payload_key(), "projects");
        assert_eq!(Operation::ListUsers.payload_key(), "users");
    }

    #[test]
    fn assignment_operations_return_the_task() {
        assert_eq!(Operation::AddAssignee.payload_key(), "task");
        assert_eq!(Operation::RemoveAssignee.payload_key(), "task");
    }

    #[test]
    fn failure_messages_name_the_operation() {
        assert_eq!(Operation::AddProject.failure_message(), "Failed to add project");
        assert_eq!(Operation::AddUser.failure_message(), "Failed to add user");
    }
}
