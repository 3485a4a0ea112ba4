//! Domain Layer - Core Entity Trait
//!
//! Basic contract for domain entities plus the shared error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TodoId;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Ord + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    /// Submitted text did not pass the empty-task guard
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The targeted todo is no longer stored
    #[error("Not found: todo #{0}")]
    NotFound(TodoId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NotFound(TodoId::new(7)).to_string(),
            "Not found: todo #7"
        );
        assert_eq!(
            DomainError::InvalidInput("empty".into()).to_string(),
            "Invalid input: empty"
        );
    }
}
