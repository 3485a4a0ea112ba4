//! Todo Entity
//!
//! A single task entry: id, text and completion flag.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Identifier of a todo, allocated by the store in strictly increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u32);

impl TodoId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique identifier, never reused
    pub id: TodoId,
    /// Task text
    pub task: String,
    /// Completion status
    pub checked: bool,
}

impl TodoRecord {
    /// Create a new unchecked record
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            checked: false,
        }
    }
}

impl Entity for TodoRecord {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Counters shown under the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: usize,
    pub checked: usize,
    pub remaining: usize,
}

impl TodoStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TodoRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;
            if record.checked {
                stats.checked += 1;
            }
        }
        stats.remaining = stats.total - stats.checked;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = TodoRecord::new(TodoId::new(1), "Buy milk");
        assert_eq!(record.id(), TodoId::new(1));
        assert_eq!(record.task, "Buy milk");
        assert!(!record.checked);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&TodoRecord::new(TodoId::new(3), "x")).unwrap();
        assert_eq!(json, r#"{"id":3,"task":"x","checked":false}"#);
    }

    #[test]
    fn test_stats() {
        let mut done = TodoRecord::new(TodoId::new(1), "a");
        done.checked = true;
        let open = TodoRecord::new(TodoId::new(2), "b");

        let stats = TodoStats::from_records([&done, &open]);
        assert_eq!(stats, TodoStats { total: 2, checked: 1, remaining: 1 });
    }
}
