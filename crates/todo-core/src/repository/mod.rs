//! Repository Layer
//!
//! Data access abstraction and the in-memory todo store.

mod traits;
mod todo_store;

#[cfg(test)]
mod tests;

pub use traits::TodoRepository;
pub use todo_store::TodoStore;
