//! Todo Form Component
//!
//! Text entry plus the "Add" submit button.

use leptos::prelude::*;
use todo_core::UiEvent;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(UiEvent::Submit);
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                id="input-form"
                placeholder="What needs doing?"
                prop:value=move || store.input().get()
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit" id="register">"Add"</button>
        </form>
    }
}
