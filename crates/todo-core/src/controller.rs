//! Sync Controller
//!
//! Runs the loop every user action goes through:
//! store mutation → render → handler (re)attachment.
//!
//! The controller owns its store and renderer outright; the app root
//! constructs it once per session and drops it at teardown.

use log::{debug, warn};

use crate::config::{MissingCheckPolicy, TodoConfig};
use crate::domain::{DomainError, DomainResult, TodoId, TodoRecord, TodoStats};
use crate::render::{HandlerBinding, HandlerId, HandlerKind, RenderReport, Renderer};
use crate::repository::{TodoRepository, TodoStore};

pub type ControllerResult<T> = DomainResult<T>;

/// Events raised by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The add form was submitted; the text comes from the renderer's input
    Submit,
    CheckboxChanged { handler: HandlerId, checked: bool },
    DeleteClicked { handler: HandlerId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Added(TodoId),
    Checked(Option<TodoRecord>),
    Deleted(TodoId),
    /// The handler's element is gone; nothing happened
    Ignored,
}

pub struct SyncController<R: TodoRepository = TodoStore> {
    store: R,
    renderer: Renderer,
    config: TodoConfig,
}

impl SyncController<TodoStore> {
    /// Controller with an empty in-memory store and a renderer in the
    /// configured mode
    pub fn from_config(config: TodoConfig) -> Self {
        let renderer = Renderer::new(config.render_mode);
        Self::new(TodoStore::new(), renderer, config)
    }
}

impl<R: TodoRepository> SyncController<R> {
    pub fn new(store: R, renderer: Renderer, config: TodoConfig) -> Self {
        Self {
            store,
            renderer,
            config,
        }
    }

    /// Route a surface event through its handler
    pub fn dispatch(&mut self, event: UiEvent) -> ControllerResult<EventOutcome> {
        match event {
            UiEvent::Submit => self.on_form_submit().map(EventOutcome::Added),
            UiEvent::CheckboxChanged { handler, checked } => {
                match self.bound(handler, HandlerKind::Change) {
                    Some(id) => self.on_checkbox_change(id, checked).map(EventOutcome::Checked),
                    None => Ok(EventOutcome::Ignored),
                }
            }
            UiEvent::DeleteClicked { handler } => match self.bound(handler, HandlerKind::Delete) {
                Some(id) => self.on_delete_click(id).map(|()| EventOutcome::Deleted(id)),
                None => Ok(EventOutcome::Ignored),
            },
        }
    }

    fn bound(&self, handler: HandlerId, kind: HandlerKind) -> Option<TodoId> {
        match self.renderer.resolve(handler) {
            Some(HandlerBinding { todo, kind: bound }) if bound == kind => Some(todo),
            _ => {
                debug!("event on detached handler {:?} ignored", handler);
                None
            }
        }
    }

    pub fn on_form_submit(&mut self) -> ControllerResult<TodoId> {
        let task = self.renderer.input().to_string();
        if !self.config.accepts_task(&task) {
            debug!("rejected empty task");
            return Err(DomainError::InvalidInput(self.config.validation_message.clone()));
        }

        let id = self.store.add_todo(&task);
        self.renderer.reset_input_field();
        self.resync();
        Ok(id)
    }

    pub fn on_checkbox_change(
        &mut self,
        id: TodoId,
        checked: bool,
    ) -> ControllerResult<Option<TodoRecord>> {
        let updated = match self.store.check_todo(id, checked) {
            Ok(record) => Some(record),
            Err(DomainError::NotFound(missing))
                if self.config.missing_check == MissingCheckPolicy::Ignore =>
            {
                warn!("checkbox change for missing todo #{} ignored", missing);
                None
            }
            Err(err) => {
                warn!("checkbox change aborted: {}", err);
                return Err(err);
            }
        };
        self.resync();
        Ok(updated)
    }

    pub fn on_delete_click(&mut self, id: TodoId) -> ControllerResult<()> {
        self.store.remove_todo(id);
        self.resync();
        Ok(())
    }

    /// Render the current store snapshot and make sure every visible item
    /// has exactly one change and one delete handler
    pub fn resync(&mut self) -> RenderReport {
        let todos = self.store.get_todos();
        let mut report = self.renderer.render(&todos);

        for todo in &todos {
            let had_handlers = self
                .renderer
                .item(todo.id)
                .is_some_and(|item| item.handlers.is_some());
            if !had_handlers && self.renderer.install_handlers(todo.id).is_some() {
                report.handlers_installed += 1;
            }
        }
        report
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    pub fn stats(&self) -> TodoStats {
        self.store.stats()
    }
}
