//! Task record: the sole entity of the collection.

use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};

fn is_false(v: &bool) -> bool {
    !*v
}

/// A task record as stored in the `tasks` collection.
///
/// Wire shape is camelCase with optional fields omitted when absent, so a
/// record round-trips byte-compatible with what the original client wrote.
/// `priority` stays the raw integer: nothing validates it on write, and
/// out-of-range values must survive a read (they just match no stats bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub category: String,
    pub priority: u8,
    pub completed: bool,

    /// Absent on the wire means active.
    #[serde(default, skip_serializing_if = "is_false")]
    pub archived: bool,

    /// Currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,

    /// Epoch millis, stamped by the repository at create time. Optional on
    /// read: records written by older client variants may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Task {
    /// The known priority this task falls under, if any.
    pub fn priority_bucket(&self) -> Option<Priority> {
        Priority::from_level(self.priority)
    }

    /// Not archived.
    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

/// Sort newest first: descending `createdAt`, records without a timestamp
/// last, ties broken by id so the order is deterministic.
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        let key_a = (a.created_at.unwrap_or(i64::MIN), &a.id);
        let key_b = (b.created_at.unwrap_or(i64::MIN), &b.id);
        key_b.cmp(&key_a)
    });
}

/// Caller-supplied fields for a new task. The repository assigns `id`,
/// `completed = false` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub category: String,
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, category: impl Into<String>, priority: u8) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            priority,
            cost: None,
            time: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time = Some(minutes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, created_at: Option<i64>) -> Task {
        Task {
            id: TaskId::from(id),
            title: "t".to_string(),
            category: "c".to_string(),
            priority: 2,
            completed: false,
            archived: false,
            cost: None,
            time: None,
            created_at,
        }
    }

    #[test]
    fn wire_shape_is_camel_case_and_omits_absent_fields() {
        let t = task("k1", Some(1700000000000));
        let value = serde_json::to_value(&t).unwrap();

        assert_eq!(value["createdAt"], 1700000000000i64);
        // Optional fields and archived=false stay off the wire.
        assert!(value.get("cost").is_none());
        assert!(value.get("time").is_none());
        assert!(value.get("archived").is_none());
    }

    #[test]
    fn foreign_record_without_created_at_deserializes() {
        let raw = r#"{"id":"k1","title":"A","category":"x","priority":2,"completed":true}"#;
        let t: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(t.created_at, None);
        assert!(!t.archived);
        assert!(t.completed);
    }

    #[test]
    fn sort_puts_newest_first_and_missing_timestamps_last() {
        let mut tasks = vec![
            task("a", Some(100)),
            task("b", None),
            task("c", Some(300)),
            task("d", Some(200)),
        ];
        sort_newest_first(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn sort_breaks_timestamp_ties_by_id() {
        let mut tasks = vec![task("a", Some(100)), task("b", Some(100))];
        sort_newest_first(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn out_of_range_priority_has_no_bucket() {
        let mut t = task("k1", None);
        t.priority = 4;
        assert_eq!(t.priority_bucket(), None);
        t.priority = 2;
        assert_eq!(t.priority_bucket(), Some(Priority::Medium));
    }
}
