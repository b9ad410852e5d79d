//! Priority levels.

use std::fmt;

/// Known priority levels for a task.
///
/// The wire format carries the raw integer (1 = Low, 2 = Medium, 3 = High)
/// and nothing validates it on write, so `Task::priority` stays a `u8`.
/// This enum names the levels the UI and the aggregation buckets know about;
/// anything outside the set simply matches no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All known levels, lowest first. Bucket order for stats.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// The integer carried on the wire.
    pub fn level(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Map a raw level back to a known priority. `None` for anything
    /// outside {1, 2, 3}.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            _ => None,
        }
    }

    /// Zero-based bucket index (for per-priority stats arrays).
    pub fn index(self) -> usize {
        self.level() as usize - 1
    }

    /// Display label as the original UI renders it.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Baja",
            Priority::Medium => "Media",
            Priority::High => "Alta",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(name)
    }
}
