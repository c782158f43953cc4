//! The completion-transition rule shared by projects and tasks.
//!
//! `completed_at` is stamped exactly when `completed` flips false -> true and
//! cleared when it flips back. Re-asserting the current value never moves
//! the timestamp.

use crate::types::Timestamp;

/// A completion flag together with the moment it was last set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
}

impl Completion {
    /// Initial state for a freshly created row.
    pub fn new(completed: bool, now: Timestamp) -> Self {
        let mut completion = Self::default();
        completion.set(completed, now);
        completion
    }

    /// Apply a new `completed` value. Returns `true` if anything changed.
    pub fn set(&mut self, completed: bool, now: Timestamp) -> bool {
        if self.completed == completed {
            return false;
        }
        self.completed = completed;
        self.completed_at = completed.then_some(now);
        true
    }
}
