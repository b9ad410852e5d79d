//! TaskStore port - the repository contract over the `tasks` collection.

use async_trait::async_trait;

use crate::domain::{NewTask, StoreError, Task, TaskId};

/// Result of [`TaskStore::toggle_completed`].
///
/// Toggling a missing id is a no-op by contract (the original client
/// silently ignored it). Naming the outcome keeps that behavior visible to
/// callers and testable, instead of masking missing-id bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The record existed; `completed` now holds the new value.
    Toggled { completed: bool },
    /// No record under that id; nothing was written.
    NotFound,
}

/// Repository over the `tasks` collection.
///
/// Four operations, all suspending until the store round-trip completes.
/// No timeout, no cancellation, no retry: transport failures propagate to
/// the caller unmodified. There is no local cache either; callers observe
/// their own mutations by re-fetching via [`list_all`](Self::list_all).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a task: `completed = false`, `createdAt` stamped now, key
    /// assigned by the store. Returns the record as written.
    async fn create(&self, input: NewTask) -> Result<Task, StoreError>;

    /// The entire collection, newest first (descending `createdAt`; records
    /// without a timestamp sort last). An empty collection is an empty vec,
    /// not an error. Filtering by priority/completion/archived state is the
    /// caller's concern over the full set.
    async fn list_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Read-modify-write flip of `completed`. Missing id is the documented
    /// [`ToggleOutcome::NotFound`] no-op.
    async fn toggle_completed(&self, id: &TaskId) -> Result<ToggleOutcome, StoreError>;

    /// Write the `archived` flag. Missing id is [`StoreError::NotFound`];
    /// no partial record is ever created.
    async fn set_archived(&self, id: &TaskId, archived: bool) -> Result<(), StoreError>;
}
