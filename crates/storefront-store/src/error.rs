//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store failed.
    #[error("Store backend error: {0}")]
    Backend(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
