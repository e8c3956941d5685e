//! Error types for list mutations and persistence.

use thiserror::Error;

/// Rejected list mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Submitted text was empty after trimming
    #[error("item text is empty")]
    EmptyText,

    /// Stored ids already reach `ItemId::MAX`
    #[error("no item id left to allocate")]
    IdsExhausted,
}

/// Persistence failure
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store could not be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Store rejected a write (quota exceeded, ...)
    #[error("storage write failed: {0}")]
    Write(String),

    /// Stored value is not a valid item list
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
