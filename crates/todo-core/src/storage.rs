//! Persistence
//!
//! The whole list is stored as one JSON array under [`TODOS_KEY`]:
//! `[{"id":1700000000000,"text":"buy milk","completed":false}]`.
//! Every write is a full overwrite.

use std::collections::HashMap;

use crate::error::StorageResult;
use crate::list::TodoList;

/// Key holding the serialized list
pub const TODOS_KEY: &str = "todos";

/// String key-value store the list is persisted into.
///
/// Implementations: `MemoryStore` here, browser localStorage in the UI crate.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value under `key`
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored value, for inspection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode(list: &TodoList) -> StorageResult<String> {
    Ok(serde_json::to_string(list)?)
}

/// Parse a stored value. JSON `null` decodes to an empty list.
pub fn decode(raw: &str) -> StorageResult<TodoList> {
    let list: Option<TodoList> = serde_json::from_str(raw)?;
    Ok(list.unwrap_or_default())
}

/// Read the persisted list, `None` if nothing was ever stored
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<Option<TodoList>> {
    match store.get(TODOS_KEY)? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

/// Overwrite the persisted list
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, list: &TodoList) -> StorageResult<()> {
    let raw = encode(list)?;
    store.set(TODOS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[test]
    fn test_encode_format() {
        let list = TodoList::new().add("buy milk", 1_700_000_000_000).unwrap();
        assert_eq!(
            encode(&list).unwrap(),
            r#"[{"id":1700000000000,"text":"buy milk","completed":false}]"#
        );
        assert_eq!(encode(&TodoList::new()).unwrap(), "[]");
    }

    #[test]
    fn test_decode_null_is_empty() {
        assert!(decode("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_corrupt_value() {
        assert!(matches!(decode("{not json"), Err(StorageError::Serialization(_))));
        assert!(matches!(decode(r#"[{"id":"x"}]"#), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();
        assert!(load(&store).unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let list = TodoList::new()
            .add("buy milk", 1).unwrap()
            .add("walk dog", 2).unwrap()
            .toggle(2);

        save(&mut store, &list).unwrap();
        assert_eq!(load(&store).unwrap(), Some(list));
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        let list = TodoList::new().add("A", 1).unwrap();
        save(&mut store, &list).unwrap();
        save(&mut store, &list.cleared()).unwrap();
        assert_eq!(store.raw(TODOS_KEY), Some("[]"));
    }
}
