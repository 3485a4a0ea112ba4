//! In-memory Todo Store

use std::collections::BTreeMap;

use log::debug;

use super::traits::TodoRepository;
use crate::domain::{DomainError, DomainResult, Entity, TodoId, TodoRecord, TodoStats};

/// Session-scoped todo store
///
/// Ids only ever grow, so ordering the map by id is the same as ordering
/// it by insertion.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    next_id: u32,
    todos: BTreeMap<TodoId, TodoRecord>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next `add_todo` call will return
    pub fn peek_next_id(&self) -> TodoId {
        TodoId::new(self.next_id + 1)
    }
}

impl TodoRepository for TodoStore {
    fn add_todo(&mut self, task: &str) -> TodoId {
        self.next_id += 1;
        let record = TodoRecord::new(TodoId::new(self.next_id), task);
        let id = record.id();
        self.todos.insert(id, record);
        debug!("added todo #{} ({} stored)", id, self.todos.len());
        id
    }

    fn get_todo(&self, id: TodoId) -> Option<&TodoRecord> {
        self.todos.get(&id)
    }

    fn remove_todo(&mut self, id: TodoId) -> Option<TodoRecord> {
        let removed = self.todos.remove(&id);
        if removed.is_some() {
            debug!("removed todo #{}", id);
        }
        removed
    }

    fn check_todo(&mut self, id: TodoId, checked: bool) -> DomainResult<TodoRecord> {
        let todo = self.todos.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        todo.checked = checked;
        debug!("todo #{} checked={}", id, checked);
        Ok(todo.clone())
    }

    fn get_todos(&self) -> Vec<TodoRecord> {
        self.todos.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.todos.len()
    }

    fn stats(&self) -> TodoStats {
        TodoStats::from_records(self.todos.values())
    }
}
