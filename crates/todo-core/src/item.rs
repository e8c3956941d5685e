//! Item Entity

use serde::{Deserialize, Serialize};

/// Creation time in milliseconds since the Unix epoch, also used as identity
pub type ItemId = u64;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create a new incomplete item
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
