//! List Manager
//!
//! Owns the list, the input draft and the validation notice, and mirrors the
//! list into a `KeyValueStore` after every mutation.

use crate::error::TodoError;
use crate::item::ItemId;
use crate::list::TodoList;
use crate::notice::{DismissReason, Notice, NoticeTicket};
use crate::storage::{self, KeyValueStore};

/// Result of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item stored under this id
    Added(ItemId),
    /// Blank text; the notice was shown with this ticket
    Rejected(NoticeTicket),
    /// No fresh id could be allocated; nothing changed
    IdsExhausted,
}

#[derive(Debug)]
pub struct ListManager<S> {
    list: TodoList,
    draft: String,
    notice: Notice,
    store: S,
}

impl<S: KeyValueStore> ListManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            list: TodoList::new(),
            draft: String::new(),
            notice: Notice::default(),
            store,
        }
    }

    /// Hydrate from the store. Only a non-empty stored list replaces the
    /// current one; missing or unreadable data is skipped.
    pub fn initialize(&mut self) {
        match storage::load(&self.store) {
            Ok(Some(stored)) if !stored.is_empty() => {
                log::info!("[STORE] Loaded {} items", stored.len());
                self.list = stored;
            }
            Ok(_) => log::debug!("[STORE] Nothing to load"),
            Err(e) => log::warn!("[STORE] Ignoring stored items: {}", e),
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Add the current draft
    pub fn submit(&mut self, now_ms: ItemId) -> AddOutcome {
        let text = std::mem::take(&mut self.draft);
        let outcome = self.add(&text, now_ms);
        if let AddOutcome::Rejected(_) = outcome {
            // keep what the user typed
            self.draft = text;
        }
        outcome
    }

    /// Add `text` as a new item; blank text shows the notice instead.
    /// A successful add clears the draft.
    pub fn add(&mut self, text: &str, now_ms: ItemId) -> AddOutcome {
        let result = match self.list.next_id(now_ms) {
            Some(id) => self.list.clone().add(text, id).map(|next| (id, next)),
            None if text.trim().is_empty() => Err(TodoError::EmptyText),
            None => Err(TodoError::IdsExhausted),
        };
        match result {
            Ok((id, next)) => {
                self.list = next;
                self.draft.clear();
                log::debug!("[LIST] Added item {}", id);
                self.persist();
                AddOutcome::Added(id)
            }
            Err(TodoError::EmptyText) => {
                log::debug!("[LIST] Rejected blank item");
                AddOutcome::Rejected(self.notice.show())
            }
            Err(e @ TodoError::IdsExhausted) => {
                log::warn!("[LIST] Item not added: {}", e);
                AddOutcome::IdsExhausted
            }
        }
    }

    /// Flip completion on `id` and regroup. Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: ItemId) {
        if self.list.get(id).is_none() {
            log::debug!("[LIST] Toggle on unknown item {}", id);
            return;
        }
        self.list = std::mem::take(&mut self.list).toggle(id);
        self.persist();
    }

    pub fn reset_all(&mut self) {
        self.list = std::mem::take(&mut self.list).cleared();
        log::debug!("[LIST] Cleared all items");
        self.persist();
    }

    /// Returns whether the notice was hidden by this call
    pub fn dismiss_notification(&mut self, reason: DismissReason) -> bool {
        self.notice.dismiss(reason)
    }

    /// Auto-dismiss callback for the showing identified by `ticket`
    pub fn expire_notification(&mut self, ticket: NoticeTicket) -> bool {
        self.notice.expire(ticket)
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save(&mut self.store, &self.list) {
            log::warn!("[STORE] Failed to save {} items: {}", self.list.len(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::{MemoryStore, TODOS_KEY};

    fn setup() -> ListManager<MemoryStore> {
        let mut manager = ListManager::new(MemoryStore::new());
        manager.initialize();
        manager
    }

    fn texts<S: KeyValueStore>(manager: &ListManager<S>) -> Vec<String> {
        manager.list().items().iter().map(|i| i.text.clone()).collect()
    }

    /// Store that refuses every write
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_blank_submit_shows_notice() {
        let mut manager = setup();
        manager.set_draft("  ");

        let outcome = manager.submit(1);
        assert!(matches!(outcome, AddOutcome::Rejected(_)));
        assert!(manager.list().is_empty());
        assert!(manager.notice().is_visible());
        assert_eq!(manager.draft(), "  ");
        // nothing written
        assert_eq!(manager.store().raw(TODOS_KEY), None);
    }

    #[test]
    fn test_submit_adds_and_clears_draft() {
        let mut manager = setup();
        manager.set_draft("buy milk");
        assert_eq!(manager.submit(1), AddOutcome::Added(1));
        assert_eq!(manager.draft(), "");

        manager.set_draft("walk dog");
        manager.submit(2);
        assert_eq!(texts(&manager), vec!["walk dog", "buy milk"]);
        assert!(!manager.notice().is_visible());
    }

    #[test]
    fn test_add_with_explicit_text_ignores_draft() {
        let mut manager = setup();
        manager.set_draft("typed elsewhere");

        assert!(matches!(manager.add("  ", 1), AddOutcome::Rejected(_)));
        assert_eq!(manager.draft(), "typed elsewhere");
        assert!(manager.list().is_empty());

        assert_eq!(manager.add(" buy milk ", 2), AddOutcome::Added(2));
        assert_eq!(texts(&manager), vec!["buy milk"]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut manager = setup();
        manager.add("buy milk", 1);
        assert_eq!(
            manager.store().raw(TODOS_KEY),
            Some(r#"[{"id":1,"text":"buy milk","completed":false}]"#)
        );

        manager.toggle_complete(1);
        assert_eq!(
            manager.store().raw(TODOS_KEY),
            Some(r#"[{"id":1,"text":"buy milk","completed":true}]"#)
        );

        manager.reset_all();
        assert!(manager.list().is_empty());
        assert_eq!(manager.store().raw(TODOS_KEY), Some("[]"));
    }

    #[test]
    fn test_toggle_reorders_stored_list() {
        let mut manager = setup();
        manager.add("B", 1);
        manager.add("A", 2);
        assert_eq!(texts(&manager), vec!["A", "B"]);

        manager.toggle_complete(2);
        assert_eq!(texts(&manager), vec!["B", "A"]);
        assert!(manager.list().get(2).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut manager = setup();
        manager.add("A", 1);
        let before = manager.list().clone();
        manager.toggle_complete(42);
        assert_eq!(manager.list(), &before);
    }

    #[test]
    fn test_same_millisecond_adds_get_distinct_ids() {
        let mut manager = setup();
        assert_eq!(manager.add("A", 100), AddOutcome::Added(100));
        assert_eq!(manager.add("B", 100), AddOutcome::Added(101));
    }

    #[test]
    fn test_reload_restores_identical_list() {
        let mut manager = setup();
        manager.add("buy milk", 1);
        manager.add("walk dog", 2);
        manager.add("call mom", 3);
        manager.toggle_complete(2);
        let before = manager.list().clone();

        let mut restarted = ListManager::new(manager.store().clone());
        restarted.initialize();
        assert_eq!(restarted.list(), &before);
    }

    #[test]
    fn test_initialize_ignores_empty_and_corrupt_data() {
        for raw in ["[]", "null", "{broken"] {
            let mut manager = ListManager::new(MemoryStore::with_entry(TODOS_KEY, raw));
            manager.initialize();
            assert!(manager.list().is_empty(), "stored {:?}", raw);
        }
    }

    #[test]
    fn test_notice_dismissal_paths() {
        let mut manager = setup();
        let AddOutcome::Rejected(first) = manager.add("", 1) else {
            panic!("blank add accepted");
        };
        manager.dismiss_notification(DismissReason::ClickAway);
        assert!(manager.notice().is_visible());

        manager.dismiss_notification(DismissReason::CloseButton);
        assert!(!manager.notice().is_visible());

        let AddOutcome::Rejected(second) = manager.add(" ", 2) else {
            panic!("blank add accepted");
        };
        assert!(!manager.expire_notification(first));
        assert!(manager.notice().is_visible());
        assert!(manager.expire_notification(second));
        assert!(!manager.notice().is_visible());
    }

    #[test]
    fn test_stored_max_id_does_not_break_add() {
        let stored = r#"[{"id":18446744073709551615,"text":"x","completed":false}]"#;
        let mut manager = ListManager::new(MemoryStore::with_entry(TODOS_KEY, stored));
        manager.initialize();

        assert_eq!(manager.add("y", 1), AddOutcome::IdsExhausted);
        assert_eq!(texts(&manager), vec!["x"]);
        assert_eq!(manager.store().raw(TODOS_KEY), Some(stored));

        // blank text still gets the notice
        assert!(matches!(manager.add(" ", 1), AddOutcome::Rejected(_)));
        assert!(manager.notice().is_visible());

        // the list stays usable
        manager.toggle_complete(ItemId::MAX);
        assert!(manager.list().get(ItemId::MAX).unwrap().completed);
        manager.reset_all();
        assert_eq!(manager.add("y", 1), AddOutcome::Added(1));
    }

    #[test]
    fn test_click_away_dismissal_reports_no_change() {
        let mut manager = setup();
        manager.add("", 1);
        assert!(!manager.dismiss_notification(DismissReason::ClickAway));
        assert!(manager.dismiss_notification(DismissReason::CloseButton));
        assert!(!manager.dismiss_notification(DismissReason::CloseButton));
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut manager = ListManager::new(ReadOnlyStore);
        manager.initialize();
        manager.add("A", 1);
        manager.add("B", 2);
        manager.toggle_complete(2);
        assert_eq!(texts(&manager), vec!["A", "B"]);
    }
}
