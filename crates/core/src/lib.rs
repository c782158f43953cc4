//! Domain model for the todo service.
//!
//! Holds the rules that outlive any single request: name and content
//! validation, the completion-transition rule, and the guards on deletion
//! and assignment. Nothing here touches storage.

pub mod comment;
pub mod completion;
pub mod error;
pub mod project;
pub mod task;
pub mod types;
pub mod user;
pub mod validation;
