//! Pure aggregation over a fetched task list.
//!
//! No I/O here: callers fetch the full collection once and hand it over.
//! Totals count every task; the per-priority breakdown only buckets tasks
//! whose raw priority maps to a known [`Priority`] level.

use crate::domain::{Priority, Task};

/// Counts and sums over one set of tasks.
///
/// Absent `cost`/`time` fields contribute 0 to the sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub total_cost: f64,
    pub total_minutes: u64,
}

impl TaskStats {
    fn add(&mut self, task: &Task) {
        self.total += 1;
        if task.completed {
            self.completed += 1;
        }
        self.total_cost += task.cost.unwrap_or(0.0);
        self.total_minutes += u64::from(task.time.unwrap_or(0));
    }

    /// `completed / total`, 0.0 for an empty set.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Overall stats plus the per-priority breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskSummary {
    pub overall: TaskStats,
    by_priority: [TaskStats; 3],
}

impl TaskSummary {
    pub fn for_priority(&self, priority: Priority) -> &TaskStats {
        &self.by_priority[priority.index()]
    }
}

/// Compute summary statistics over an in-memory task list.
///
/// Tasks with a priority outside {1, 2, 3} count in `overall` but land in
/// no priority bucket.
pub fn summarize<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskSummary {
    let mut summary = TaskSummary::default();
    for task in tasks {
        summary.overall.add(task);
        if let Some(priority) = task.priority_bucket() {
            summary.by_priority[priority.index()].add(task);
        }
    }
    summary
}

/// Render total minutes as the UI does: hours = total / 60, minutes =
/// total % 60, zero total is `"0min"`, zero remainders drop their part.
pub fn format_minutes(total: u64) -> String {
    if total == 0 {
        return "0min".to_string();
    }
    let hours = total / 60;
    let minutes = total % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}

/// Fixed two-decimal rendering with the original UI's currency prefix.
pub fn format_cost(amount: f64) -> String {
    format!("S/ {amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use rstest::rstest;

    fn task(priority: u8, completed: bool, cost: Option<f64>, time: Option<u32>) -> Task {
        Task {
            id: TaskId::from("k"),
            title: "t".to_string(),
            category: "c".to_string(),
            priority,
            completed,
            archived: false,
            cost,
            time,
            created_at: None,
        }
    }

    #[test]
    fn empty_list_has_zero_ratio_not_a_panic() {
        let tasks: Vec<Task> = Vec::new();
        let summary = summarize(&tasks);
        assert_eq!(summary.overall.total, 0);
        assert_eq!(summary.overall.completion_ratio(), 0.0);
        for priority in Priority::ALL {
            assert_eq!(summary.for_priority(priority).total, 0);
        }
    }

    #[test]
    fn completed_never_exceeds_total_and_ratio_stays_in_unit_interval() {
        let tasks = vec![
            task(1, true, None, None),
            task(2, false, None, None),
            task(3, true, None, None),
        ];
        let stats = summarize(&tasks).overall;
        assert!(stats.completed <= stats.total);
        let ratio = stats.completion_ratio();
        assert!((0.0..=1.0).contains(&ratio));
        assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn absent_cost_and_time_count_as_zero() {
        let with_values = vec![
            task(1, false, Some(10.5), Some(30)),
            task(2, false, Some(4.5), Some(45)),
        ];
        let baseline = summarize(&with_values).overall;
        assert_eq!(baseline.total_cost, 15.0);
        assert_eq!(baseline.total_minutes, 75);

        // Adding a task without cost/time changes counts, not sums.
        let mut extended = with_values;
        extended.push(task(3, false, None, None));
        let stats = summarize(&extended).overall;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_cost, baseline.total_cost);
        assert_eq!(stats.total_minutes, baseline.total_minutes);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn out_of_range_priority_is_excluded_from_every_bucket(#[case] level: u8) {
        let tasks = vec![task(level, true, Some(5.0), Some(10)), task(2, false, None, None)];
        let summary = summarize(&tasks);

        assert_eq!(summary.overall.total, 2);
        assert_eq!(summary.overall.completed, 1);
        assert_eq!(summary.overall.total_cost, 5.0);

        let bucketed: usize = Priority::ALL
            .iter()
            .map(|p| summary.for_priority(*p).total)
            .sum();
        assert_eq!(bucketed, 1);
    }

    #[test]
    fn buckets_sum_to_total_when_all_priorities_are_in_range() {
        let tasks = vec![
            task(1, false, None, None),
            task(1, true, None, None),
            task(2, false, None, None),
            task(3, true, None, None),
        ];
        let summary = summarize(&tasks);

        let bucketed: usize = Priority::ALL
            .iter()
            .map(|p| summary.for_priority(*p).total)
            .sum();
        assert_eq!(bucketed, summary.overall.total);
        assert_eq!(summary.for_priority(Priority::Low).total, 2);
        assert_eq!(summary.for_priority(Priority::Low).completed, 1);
        assert_eq!(summary.for_priority(Priority::Medium).total, 1);
        assert_eq!(summary.for_priority(Priority::High).total, 1);
    }

    #[test]
    fn buckets_restrict_sums_to_their_priority() {
        let tasks = vec![
            task(1, false, Some(2.0), Some(20)),
            task(3, true, Some(8.0), Some(100)),
        ];
        let summary = summarize(&tasks);

        let low = summary.for_priority(Priority::Low);
        assert_eq!(low.total_cost, 2.0);
        assert_eq!(low.total_minutes, 20);

        let high = summary.for_priority(Priority::High);
        assert_eq!(high.total_cost, 8.0);
        assert_eq!(high.total_minutes, 100);
    }

    #[rstest]
    #[case(0, "0min")]
    #[case(45, "45min")]
    #[case(60, "1h")]
    #[case(65, "1h 5min")]
    #[case(120, "2h")]
    #[case(125, "2h 5min")]
    fn minutes_decompose_into_hours_and_remainder(#[case] total: u64, #[case] expected: &str) {
        assert_eq!(format_minutes(total), expected);
    }

    #[test]
    fn cost_renders_with_two_decimals() {
        assert_eq!(format_cost(0.0), "S/ 0.00");
        assert_eq!(format_cost(12.5), "S/ 12.50");
        assert_eq!(format_cost(1234.567), "S/ 1234.57");
    }
}
