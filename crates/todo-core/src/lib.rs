//! Todo Core
//!
//! Layered architecture:
//! - domain: todo entity and error types
//! - repository: the authoritative todo store
//! - render: keyed display model of the list
//! - controller: mutate → render → reattach loop

pub mod config;
pub mod controller;
pub mod domain;
pub mod render;
pub mod repository;

pub use config::{ConfigError, EmptyTaskPolicy, MissingCheckPolicy, TodoConfig};
pub use controller::{ControllerResult, EventOutcome, SyncController, UiEvent};
pub use domain::{DomainError, DomainResult, Entity, TodoId, TodoRecord, TodoStats};
pub use render::{
    checkbox_element_id, delete_button_element_id, todo_element_id, HandlerBinding, HandlerId,
    HandlerKind, ItemHandlers, RenderMode, RenderReport, RenderedItem, Renderer,
};
pub use repository::{TodoRepository, TodoStore};
