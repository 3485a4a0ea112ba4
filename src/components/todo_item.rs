//! Todo Item Component
//!
//! One row: checkbox, task label and delete button.

use leptos::prelude::*;
use todo_core::{
    checkbox_element_id, delete_button_element_id, todo_element_id, ItemHandlers, RenderedItem,
    TodoId, UiEvent,
};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// A single row, looked up by id so it follows in-place updates
#[component]
pub fn TodoItem(id: TodoId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let item: Memo<Option<RenderedItem>> = Memo::new(move |_| {
        store
            .items()
            .with(|items| items.iter().find(|item| item.id == id).cloned())
    });

    let class = move || item.with(|i| i.as_ref().map_or("content", RenderedItem::class));
    let checked = move || item.with(|i| i.as_ref().is_some_and(|i| i.checked));
    let task = move || item.with(|i| i.as_ref().map(|i| i.task.clone()).unwrap_or_default());
    // Handlers are read at event time; a row without them is inert
    let handlers = move || -> Option<ItemHandlers> {
        item.with_untracked(|i| i.as_ref().and_then(|i| i.handlers))
    };

    view! {
        <div class=class id=todo_element_id(id)>
            <label>
                <input
                    type="checkbox"
                    id=checkbox_element_id(id)
                    prop:checked=checked
                    on:change=move |ev| {
                        if let Some(h) = handlers() {
                            ctx.dispatch(UiEvent::CheckboxChanged {
                                handler: h.change,
                                checked: event_target_checked(&ev),
                            });
                        }
                    }
                />
                <span class="check-span">{task}</span>
            </label>
            <button
                type="button"
                class="delete-button"
                id=delete_button_element_id(id)
                on:click=move |_| {
                    if let Some(h) = handlers() {
                        ctx.dispatch(UiEvent::DeleteClicked { handler: h.delete });
                    }
                }
            >
                "Delete"
            </button>
        </div>
    }
}
