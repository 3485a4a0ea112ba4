//! Repository Layer - Core Traits
//!
//! Abstract interface for todo storage. The controller only talks to this
//! trait, so the store can be swapped without touching the sync loop.

use crate::domain::{DomainResult, TodoId, TodoRecord, TodoStats};

/// Authoritative todo storage
///
/// Operations are synchronous: every caller runs on the single UI thread
/// and each call completes before the next event is handled.
pub trait TodoRepository {
    /// Insert a new unchecked todo and return its freshly allocated id.
    ///
    /// Does not validate `task`; callers decide what text is acceptable.
    fn add_todo(&mut self, task: &str) -> TodoId;

    /// Look up a todo by id
    fn get_todo(&self, id: TodoId) -> Option<&TodoRecord>;

    /// Remove a todo. Removing an absent id is a no-op.
    fn remove_todo(&mut self, id: TodoId) -> Option<TodoRecord>;

    /// Set the completion flag and return the updated record
    fn check_todo(&mut self, id: TodoId, checked: bool) -> DomainResult<TodoRecord>;

    /// Point-in-time copy of all todos in display order
    fn get_todos(&self) -> Vec<TodoRecord>;

    /// Number of stored todos
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> TodoStats {
        TodoStats::from_records(&self.get_todos())
    }
}
