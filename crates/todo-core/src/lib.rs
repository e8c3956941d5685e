//! Todo Core
//!
//! Browser-independent half of the todo widget:
//! - item / list: data model and pure mutations
//! - notice: validation notification state
//! - storage: key-value persistence of the list
//! - manager: the List Manager tying them together

mod error;
mod item;
mod list;
mod manager;
mod notice;
mod storage;

pub use error::{StorageError, StorageResult, TodoError};
pub use item::{Item, ItemId};
pub use list::TodoList;
pub use manager::{AddOutcome, ListManager};
pub use notice::{DismissReason, Notice, NoticeTicket, AUTO_DISMISS_MS, NOTICE_MESSAGE};
pub use storage::{decode, encode, load, save, KeyValueStore, MemoryStore, TODOS_KEY};
