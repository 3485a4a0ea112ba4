//! Todo Sync App
//!
//! Application root: builds the session's controller and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{SyncController, TodoConfig};

use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(SyncController::from_config(config), store);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>

            <TodoForm />

            <TodoList />

            <p class="todo-count">
                {move || {
                    let stats = store.stats().get();
                    format!("{} items, {} done", stats.total, stats.checked)
                }}
            </p>
        </main>
    }
}
