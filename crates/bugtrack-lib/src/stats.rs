//! Dashboard aggregates: counts, top assignees and recent bugs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Bug, Priority, Status};

/// Default length of the top-assignee and recent-bug lists.
pub const DEFAULT_TOP_K: usize = 5;

/// Per-status counts. Categories with no bugs report zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Open => self.open,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
            Status::Closed => self.closed,
        }
    }

    const fn slot(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Open => &mut self.open,
            Status::InProgress => &mut self.in_progress,
            Status::Resolved => &mut self.resolved,
            Status::Closed => &mut self.closed,
        }
    }

    #[must_use]
    pub const fn sum(&self) -> usize {
        self.open + self.in_progress + self.resolved + self.closed
    }
}

/// Per-priority counts. Categories with no bugs report zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl PriorityCounts {
    #[must_use]
    pub const fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Critical => self.critical,
        }
    }

    const fn slot(&mut self, priority: Priority) -> &mut usize {
        match priority {
            Priority::Low => &mut self.low,
            Priority::Medium => &mut self.medium,
            Priority::High => &mut self.high,
            Priority::Critical => &mut self.critical,
        }
    }

    #[must_use]
    pub const fn sum(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Aggregate statistics over a bug collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugStats {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

impl BugStats {
    /// Share of `total` at the given priority, 0.0 for an empty collection.
    #[must_use]
    pub fn priority_share(&self, priority: Priority) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.by_priority.get(priority) as f64 / self.total as f64
        }
    }
}

/// Count bugs by status and by priority.
#[must_use]
pub fn stats(bugs: &[Bug]) -> BugStats {
    let mut result = BugStats {
        total: bugs.len(),
        ..Default::default()
    };
    for bug in bugs {
        *result.by_status.slot(bug.status) += 1;
        *result.by_priority.slot(bug.priority) += 1;
    }
    result
}

/// Assignees by descending bug count, at most `k` entries.
///
/// Ties keep first-encounter order.
#[must_use]
pub fn top_assignees(bugs: &[Bug], k: usize) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for bug in bugs {
        let assignee = bug.assigned_to.as_str();
        if let Some(&pos) = positions.get(assignee) {
            counts[pos].1 += 1;
        } else {
            positions.insert(assignee, counts.len());
            counts.push((assignee.to_string(), 1));
        }
    }

    // `sort_by` is stable, which is what keeps ties in encounter order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);
    counts
}

/// The `k` most recently created bugs, newest first.
///
/// Equal timestamps keep input order.
#[must_use]
pub fn recent_bugs(bugs: &[Bug], k: usize) -> Vec<&Bug> {
    let mut sorted: Vec<&Bug> = bugs.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(k);
    sorted
}
