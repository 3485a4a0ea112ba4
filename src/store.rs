//! Application State Store
//!
//! Reactive mirror of the controller's display model. Leptos
//! reactive_stores gives field-level reactivity, so typing in the input
//! does not touch the list and vice versa.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{RenderedItem, SyncController, TodoRepository, TodoStats};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered rows, in display order
    pub items: Vec<RenderedItem>,
    /// Text-entry control value
    pub input: String,
    pub stats: TodoStats,
}

pub type AppStore = Store<AppState>;

/// Copy the controller's current display model into the store.
///
/// Fields are only written when they differ, so unchanged parts of the
/// page are not notified.
pub fn store_sync_from<R: TodoRepository>(store: &AppStore, controller: &SyncController<R>) {
    let renderer = controller.renderer();

    if store.items().with_untracked(|items| items.as_slice() != renderer.items()) {
        store.items().set(renderer.items().to_vec());
    }
    if store.input().with_untracked(|input| input != renderer.input()) {
        store.input().set(renderer.input().to_string());
    }
    let stats = controller.stats();
    if store.stats().get_untracked() != stats {
        store.stats().set(stats);
    }
}
