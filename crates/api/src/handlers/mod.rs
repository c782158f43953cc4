//! Request handlers, one submodule per resource.
//!
//! Every handler runs as a single [`Operation`](crate::operation::Operation).
//! Reads use a pooled connection. Writes run inside one transaction that
//! [`todo_db::settle`] commits or rolls back.

pub mod assignment;
pub mod comment;
pub mod project;
pub mod task;
pub mod user;
