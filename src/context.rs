//! Application Context
//!
//! The session's controller and its reactive mirror, shared via the
//! Leptos Context API.

use leptos::prelude::*;
use todo_core::{DomainError, EventOutcome, SyncController, UiEvent};

use crate::dom;
use crate::store::{store_sync_from, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<SyncController>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(controller: SyncController, store: AppStore) -> Self {
        let ctx = Self {
            controller: StoredValue::new(controller),
            store,
        };
        ctx.refresh();
        ctx
    }

    /// Mirror the text-entry control into the controller
    pub fn set_input(&self, text: String) {
        self.controller
            .update_value(|c| c.renderer_mut().set_input(text));
        self.refresh();
    }

    /// Run one event through the controller, then redraw
    pub fn dispatch(&self, event: UiEvent) {
        let mut result = None;
        self.controller
            .update_value(|c| result = Some(c.dispatch(event)));
        self.refresh();

        match result {
            Some(Ok(EventOutcome::Ignored)) => {
                log::debug!("{:?} hit a detached element", event);
            }
            Some(Ok(outcome)) => log::debug!("{:?} -> {:?}", event, outcome),
            Some(Err(DomainError::InvalidInput(message))) => dom::alert(&message),
            Some(Err(err)) => log::warn!("{:?} failed: {}", event, err),
            None => log::error!("controller disposed; {:?} dropped", event),
        }
    }

    fn refresh(&self) {
        let store = self.store;
        self.controller.with_value(|c| store_sync_from(&store, c));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
