//! Todo List
//!
//! Ordered item collection with pure mutation functions. Each mutation takes
//! the list by value and returns the next list.

use serde::{Deserialize, Serialize};

use crate::error::TodoError;
use crate::item::{Item, ItemId};

/// Ordered collection of items, newest first within each completion group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.pending_count()
    }

    /// Fresh id for an item created at `now_ms`.
    ///
    /// Never below or equal to an existing id, so two adds within the same
    /// millisecond still get distinct ids. `None` once an existing id is
    /// already `ItemId::MAX`.
    pub fn next_id(&self, now_ms: ItemId) -> Option<ItemId> {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) if max >= now_ms => max.checked_add(1),
            _ => Some(now_ms),
        }
    }

    /// Prepend a new incomplete item with the trimmed `text`
    pub fn add(mut self, text: &str, id: ItemId) -> Result<Self, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        self.items.insert(0, Item::new(id, text));
        Ok(self)
    }

    /// Flip `completed` on `id` and regroup: incomplete first, completed last,
    /// relative order kept inside each group. Unknown ids leave the list as is.
    pub fn toggle(mut self, id: ItemId) -> Self {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return self;
        };
        self.items[pos].completed = !self.items[pos].completed;

        let (pending, done): (Vec<Item>, Vec<Item>) =
            self.items.into_iter().partition(|item| !item.completed);
        self.items = pending;
        self.items.extend(done);
        self
    }

    /// Drop every item
    pub fn cleared(self) -> Self {
        Self::new()
    }

    /// Whether every incomplete item precedes every completed one
    pub fn is_grouped(&self) -> bool {
        self.items
            .iter()
            .skip_while(|item| !item.completed)
            .all(|item| item.completed)
    }
}

impl From<Vec<Item>> for TodoList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}
