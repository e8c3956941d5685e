//! Application Context
//!
//! Owns the List Manager signal and the auto-dismiss timer. Components read
//! and mutate the list only through this.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_core::{AddOutcome, DismissReason, Item, ItemId, ListManager, NoticeTicket, AUTO_DISMISS_MS};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct TodoContext {
    manager: RwSignal<ListManager<BrowserStorage>>,
    /// Pending auto-dismiss; replacing or clearing it cancels the old one
    dismiss_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl TodoContext {
    /// Create the manager and hydrate it from localStorage
    pub fn new() -> Self {
        let mut manager = ListManager::new(BrowserStorage);
        manager.initialize();
        Self {
            manager: RwSignal::new(manager),
            dismiss_timer: StoredValue::new_local(None),
        }
    }

    // ========================
    // Reads
    // ========================

    /// Items in stored (and display) order
    pub fn items(&self) -> Vec<Item> {
        self.manager.with(|m| m.list().items().to_vec())
    }

    pub fn notice_visible(&self) -> bool {
        self.manager.with(|m| m.notice().is_visible())
    }

    /// (pending, completed)
    pub fn counts(&self) -> (usize, usize) {
        self.manager
            .with(|m| (m.list().pending_count(), m.list().completed_count()))
    }

    // ========================
    // Mutations
    // ========================

    /// Add `text` as a new item. Returns whether it was added, so the
    /// form knows to clear its input.
    pub fn submit(&self, text: &str) -> bool {
        let now = js_sys::Date::now() as ItemId;
        match self.manager.try_update(|m| m.add(text, now)) {
            Some(AddOutcome::Added(id)) => {
                log::info!("[APP] Added item {}", id);
                true
            }
            Some(AddOutcome::Rejected(ticket)) => {
                self.schedule_dismiss(ticket);
                false
            }
            Some(AddOutcome::IdsExhausted) | None => false,
        }
    }

    pub fn toggle(&self, id: ItemId) {
        self.manager.update(|m| m.toggle_complete(id));
    }

    pub fn reset(&self) {
        self.manager.update(|m| m.reset_all());
        log::info!("[APP] Reset all items");
    }

    pub fn dismiss(&self, reason: DismissReason) {
        // click-away leaves the notice as is, so nothing is notified
        self.manager.maybe_update(|m| m.dismiss_notification(reason));
        if reason != DismissReason::ClickAway {
            self.dismiss_timer.set_value(None);
        }
    }

    fn schedule_dismiss(&self, ticket: NoticeTicket) {
        let manager = self.manager;
        let timer = Timeout::new(AUTO_DISMISS_MS, move || {
            manager.maybe_update(|m| m.expire_notification(ticket));
        });
        self.dismiss_timer.set_value(Some(timer));
    }
}

pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}
