//! Domain Layer
//!
//! Todo entity and the errors domain operations can return.
//! This layer has NO browser dependencies.

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{TodoId, TodoRecord, TodoStats};
