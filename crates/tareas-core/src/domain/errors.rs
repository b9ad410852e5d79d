//! Store errors.

use thiserror::Error;

use super::TaskId;

/// Errors surfaced by a [`TaskStore`](crate::ports::TaskStore).
///
/// Transport failures propagate unmodified from the HTTP client; there is no
/// retry layer in front of the store. A missing id on `toggle_completed` is
/// NOT an error (it is the documented `ToggleOutcome::NotFound`), but a
/// missing id on `set_archived` is, so a typo cannot silently create a
/// partial record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity or protocol failure from the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the store.
    #[error("store returned status {status} during {operation}")]
    Status { status: u16, operation: &'static str },

    /// Response body did not match the expected record shape.
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store did not hand back a key for a newly created record.
    #[error("store did not return a key for the new record")]
    MissingKey,

    /// Operation addressed an id that does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
