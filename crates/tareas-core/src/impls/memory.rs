//! In-memory task store.
//!
//! Backs tests and offline development; same contract as the Firebase
//! store, minus the network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{NewTask, StoreError, Task, TaskId, sort_newest_first};
use crate::ports::{Clock, KeyGenerator, SystemClock, TaskStore, ToggleOutcome, UlidKeyGenerator};

/// In-memory implementation of [`TaskStore`].
///
/// Records live in a `HashMap` behind a tokio `Mutex`; list order is
/// recomputed from `createdAt` on every read, like the remote store's
/// ordered query. Keys come from the injected [`KeyGenerator`] (the "server"
/// side of key assignment).
pub struct InMemoryTaskStore {
    state: Arc<Mutex<HashMap<TaskId, Task>>>,
    keys: Arc<dyn KeyGenerator>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTaskStore {
    /// Store with wall-clock time and ULID keys.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(UlidKeyGenerator::new(SystemClock)),
            Arc::new(SystemClock),
        )
    }

    /// Store with injected key assignment and clock (tests pin both).
    pub fn with_parts(keys: Arc<dyn KeyGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(HashMap::new())),
            keys,
            clock,
        }
    }

    /// Direct record read, bypassing the repository contract (for testing).
    #[cfg(test)]
    pub async fn get(&self, id: &TaskId) -> Option<Task> {
        let state = self.state.lock().await;
        state.get(id).cloned()
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, input: NewTask) -> Result<Task, StoreError> {
        let id = self.keys.generate_key();
        let task = Task {
            id: id.clone(),
            title: input.title,
            category: input.category,
            priority: input.priority,
            completed: false,
            archived: false,
            cost: input.cost,
            time: input.time,
            created_at: Some(self.clock.now_millis()),
        };

        let mut state = self.state.lock().await;
        state.insert(id.clone(), task.clone());
        tracing::debug!(id = %id, "created task");
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        let state = self.state.lock().await;
        let mut tasks: Vec<Task> = state.values().cloned().collect();
        drop(state);

        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    async fn toggle_completed(&self, id: &TaskId) -> Result<ToggleOutcome, StoreError> {
        let mut state = self.state.lock().await;
        match state.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(id = %id, completed = task.completed, "toggled task");
                Ok(ToggleOutcome::Toggled {
                    completed: task.completed,
                })
            }
            None => {
                tracing::debug!(id = %id, "toggle on missing id, no-op");
                Ok(ToggleOutcome::NotFound)
            }
        }
    }

    async fn set_archived(&self, id: &TaskId, archived: bool) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        match state.get_mut(id) {
            Some(task) => {
                task.archived = archived;
                tracing::debug!(id = %id, archived, "set archived flag");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }
}
