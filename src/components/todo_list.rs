//! Todo List Component
//!
//! Keyed list of rows. Leptos' `<For>` diffs by todo id, so rows whose id
//! survives a resync keep their DOM nodes and listeners.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div id="todos" class="todo-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <TodoItem id=item.id /> }
            />
        </div>
    }
}
