//! Domain identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned key of a task record.
///
/// The backing store mints the key at create time (a push key for the
/// Firebase store, a ULID for the in-memory store) and it never changes
/// afterwards. Keys are opaque strings; ordering of records comes from
/// `createdAt`, not from the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_serializes_as_plain_string() {
        let id = TaskId::new("-Nabc123");
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"-Nabc123\"");

        let deserialized: TaskId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn task_id_displays_raw_key() {
        let id = TaskId::from("task-key");
        assert_eq!(id.to_string(), "task-key");
        assert_eq!(id.as_str(), "task-key");
    }
}
