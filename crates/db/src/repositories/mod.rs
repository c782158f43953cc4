//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut SqliteConnection` as the first argument. Pass a pooled
//! connection for reads, or an open transaction for a request that writes.

pub mod assignment_repo;
pub mod comment_repo;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
