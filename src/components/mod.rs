//! UI Components
//!
//! Leptos components drawing the controller's display model.

mod todo_form;
mod todo_item;
mod todo_list;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
