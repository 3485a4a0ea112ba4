//! Renderer
//!
//! Display model of the todo list. The browser layer draws exactly the
//! items held here, so every property of the rendered list can be checked
//! without a DOM.
//!
//! Each rendered item owns at most one change handler and one delete
//! handler. Handlers are plain ids registered in the renderer; they stop
//! resolving as soon as their item leaves the display.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{TodoId, TodoRecord};

/// DOM id of a todo row
pub fn todo_element_id(id: TodoId) -> String {
    format!("todo-{}", id)
}

/// DOM id of a todo's checkbox
pub fn checkbox_element_id(id: TodoId) -> String {
    format!("checkbox-{}", id)
}

/// DOM id of a todo's delete button
pub fn delete_button_element_id(id: TodoId) -> String {
    format!("button-{}", id)
}

/// How `Renderer::render` reconciles the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Diff by id; unaffected items keep their handlers
    #[default]
    Keyed,
    /// Destroy and recreate every item on each render
    FullRebuild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandlerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerKind {
    Change,
    Delete,
}

/// What a live handler is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerBinding {
    pub todo: TodoId,
    pub kind: HandlerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHandlers {
    pub change: HandlerId,
    pub delete: HandlerId,
}

/// One row of the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub id: TodoId,
    pub task: String,
    /// Checkbox state
    pub checked: bool,
    /// Presentational `checked` class, toggled by `check`/`uncheck`
    pub checked_class: bool,
    pub handlers: Option<ItemHandlers>,
}

impl RenderedItem {
    fn from_record(record: &TodoRecord) -> Self {
        Self {
            id: record.id,
            task: record.task.clone(),
            checked: record.checked,
            checked_class: record.checked,
            handlers: None,
        }
    }

    /// Copy record state in; returns whether anything changed
    fn patch(&mut self, record: &TodoRecord) -> bool {
        if self.task == record.task && self.checked == record.checked {
            return false;
        }
        self.task.clone_from(&record.task);
        self.checked = record.checked;
        self.checked_class = record.checked;
        true
    }

    pub fn class(&self) -> &'static str {
        if self.checked_class { "content checked" } else { "content" }
    }

    pub fn element_id(&self) -> String {
        todo_element_id(self.id)
    }
}

/// Summary of one `render` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub created: Vec<TodoId>,
    pub updated: Vec<TodoId>,
    pub removed: Vec<TodoId>,
    pub retained: usize,
    /// Items that received fresh handlers during the resync
    pub handlers_installed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    mode: RenderMode,
    items: Vec<RenderedItem>,
    input: String,
    next_handler: u64,
    bindings: HashMap<HandlerId, HandlerBinding>,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Reconcile the displayed list with `todos`
    pub fn render(&mut self, todos: &[TodoRecord]) -> RenderReport {
        let report = match self.mode {
            RenderMode::Keyed => self.reconcile(todos),
            RenderMode::FullRebuild => self.rebuild(todos),
        };
        debug!(
            "render: {} created, {} updated, {} retained, {} removed",
            report.created.len(),
            report.updated.len(),
            report.retained,
            report.removed.len()
        );
        report
    }

    fn reconcile(&mut self, todos: &[TodoRecord]) -> RenderReport {
        let mut report = RenderReport::default();
        let mut previous: HashMap<TodoId, RenderedItem> =
            self.items.drain(..).map(|item| (item.id, item)).collect();

        let mut next = Vec::with_capacity(todos.len());
        for record in todos {
            match previous.remove(&record.id) {
                Some(mut item) => {
                    if item.patch(record) {
                        report.updated.push(record.id);
                    } else {
                        report.retained += 1;
                    }
                    next.push(item);
                }
                None => {
                    report.created.push(record.id);
                    next.push(RenderedItem::from_record(record));
                }
            }
        }

        for item in previous.into_values() {
            self.release(&item);
            report.removed.push(item.id);
        }
        report.removed.sort();

        self.items = next;
        report
    }

    fn rebuild(&mut self, todos: &[TodoRecord]) -> RenderReport {
        let mut removed: Vec<TodoId> = self.items.iter().map(|item| item.id).collect();
        removed.sort();
        self.bindings.clear();
        self.items = todos.iter().map(RenderedItem::from_record).collect();

        RenderReport {
            created: todos.iter().map(|t| t.id).collect(),
            removed,
            ..RenderReport::default()
        }
    }

    /// Append one item without touching the rest of the list
    pub fn append(&mut self, record: &TodoRecord) {
        match self.item_mut(record.id) {
            Some(item) => {
                item.patch(record);
            }
            None => self.items.push(RenderedItem::from_record(record)),
        }
    }

    /// Destroy one item and release its handlers
    pub fn remove(&mut self, id: TodoId) {
        if let Some(pos) = self.items.iter().position(|item| item.id == id) {
            let item = self.items.remove(pos);
            self.release(&item);
        }
    }

    pub fn check(&mut self, id: TodoId) {
        if let Some(item) = self.item_mut(id) {
            item.checked_class = true;
        }
    }

    pub fn uncheck(&mut self, id: TodoId) {
        if let Some(item) = self.item_mut(id) {
            item.checked_class = false;
        }
    }

    /// Give a rendered item its change and delete handlers.
    ///
    /// Returns the existing pair if the item already has one, and `None`
    /// if the item is not rendered.
    pub fn install_handlers(&mut self, id: TodoId) -> Option<ItemHandlers> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        if let Some(handlers) = self.items[pos].handlers {
            return Some(handlers);
        }

        let handlers = ItemHandlers {
            change: self.allocate_handler(id, HandlerKind::Change),
            delete: self.allocate_handler(id, HandlerKind::Delete),
        };
        self.items[pos].handlers = Some(handlers);
        Some(handlers)
    }

    pub fn resolve(&self, handler: HandlerId) -> Option<HandlerBinding> {
        self.bindings.get(&handler).copied()
    }

    /// Number of live handlers across all items
    pub fn handler_count(&self) -> usize {
        self.bindings.len()
    }

    fn allocate_handler(&mut self, todo: TodoId, kind: HandlerKind) -> HandlerId {
        self.next_handler += 1;
        let handler = HandlerId(self.next_handler);
        self.bindings.insert(handler, HandlerBinding { todo, kind });
        handler
    }

    fn release(&mut self, item: &RenderedItem) {
        if let Some(handlers) = item.handlers {
            self.bindings.remove(&handlers.change);
            self.bindings.remove(&handlers.delete);
        }
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn item(&self, id: TodoId) -> Option<&RenderedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: TodoId) -> Option<&mut RenderedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Text-entry control

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn reset_input_field(&mut self) {
        self.input.clear();
    }
}
