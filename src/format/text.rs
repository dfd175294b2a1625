//! Text formatting functions for `bt`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓ ●)
//! - Bug line and detail formatting
//! - Relative times ("3 days ago")
//! - The stats dashboard

use std::fmt::Write as _;

use bugtrack_lib::{Bug, Priority, Status};
use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::output::Dashboard;

/// Widest title shown in a single-line summary, in terminal columns.
const LINE_TITLE_WIDTH: usize = 60;

/// Status icon characters.
pub mod icons {
    /// Open - waiting for work (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress - active work (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved - fixed, awaiting confirmation (checkmark).
    pub const RESOLVED: &str = "✓";
    /// Closed - done (filled circle).
    pub const CLOSED: &str = "●";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
        Status::Closed => icons::CLOSED,
    }
}

/// Cut `text` to at most `width` columns, ending in `…` when shortened.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Format a single-line bug summary.
///
/// Format: `{icon} {id} [{priority}] {title} ({assignee})`
#[must_use]
pub fn format_bug_line(bug: &Bug) -> String {
    let mut line = format!(
        "{} {} [{}] {}",
        format_status_icon(bug.status),
        bug.id,
        bug.priority,
        truncate_to_width(&bug.title, LINE_TITLE_WIDTH),
    );
    if !bug.assigned_to.is_empty() {
        let _ = write!(line, " ({})", bug.assigned_to);
    }
    line
}

/// Describe how long before `now` the instant `then` was.
#[must_use]
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_days() >= 365 {
        (elapsed.num_days() / 365, "year")
    } else if elapsed.num_days() >= 30 {
        (elapsed.num_days() / 30, "month")
    } else if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

/// Format the full record of one bug, comments included.
#[must_use]
pub fn format_bug_details(bug: &Bug, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        format_status_icon(bug.status),
        bug.id,
        bug.title
    );
    let _ = writeln!(out, "Status:      {}", bug.status);
    let _ = writeln!(out, "Priority:    {}", bug.priority);
    let assignee = if bug.assigned_to.is_empty() {
        "(unassigned)"
    } else {
        bug.assigned_to.as_str()
    };
    let _ = writeln!(out, "Assigned to: {assignee}");
    let _ = writeln!(out, "Created by:  {}", bug.created_by);
    let _ = writeln!(
        out,
        "Created:     {}",
        format_relative_time(bug.created_at, now)
    );
    let _ = writeln!(
        out,
        "Updated:     {}",
        format_relative_time(bug.updated_at, now)
    );
    let _ = writeln!(out, "\n{}", bug.description);

    if bug.comments.is_empty() {
        out.push_str("\nNo comments yet.\n");
    } else {
        let _ = writeln!(out, "\nComments ({}):", bug.comments.len());
        for comment in &bug.comments {
            let _ = writeln!(
                out,
                "  [{}] {}, {}:",
                comment.id,
                comment.author,
                format_relative_time(comment.created_at, now)
            );
            let _ = writeln!(out, "    {}", comment.text);
        }
    }
    out
}

/// Format the stats dashboard.
#[must_use]
pub fn format_dashboard(dashboard: &Dashboard<'_>, now: DateTime<Utc>) -> String {
    let stats = &dashboard.stats;
    let mut out = String::new();
    let _ = writeln!(out, "Total bugs: {}", stats.total);

    out.push_str("\nBy status:\n");
    for status in Status::ALL {
        let _ = writeln!(
            out,
            "  {} {:<12} {}",
            format_status_icon(status),
            status.as_str(),
            stats.by_status.get(status)
        );
    }

    out.push_str("\nBy priority:\n");
    for priority in Priority::ALL.iter().rev() {
        let _ = writeln!(
            out,
            "  {:<10} {:>3}  {:>5.1}%",
            priority.as_str(),
            stats.by_priority.get(*priority),
            stats.priority_share(*priority) * 100.0
        );
    }

    out.push_str("\nTop assignees:\n");
    if dashboard.top_assignees.is_empty() {
        out.push_str("  (none)\n");
    }
    for entry in &dashboard.top_assignees {
        let name = if entry.name.is_empty() {
            "(unassigned)"
        } else {
            entry.name.as_str()
        };
        let _ = writeln!(out, "  {name:<20} {}", entry.count);
    }

    out.push_str("\nRecent bugs:\n");
    if dashboard.recent_bugs.is_empty() {
        out.push_str("  (none)\n");
    }
    for bug in &dashboard.recent_bugs {
        let _ = writeln!(
            out,
            "  {}  {}",
            format_bug_line(bug),
            format_relative_time(bug.created_at, now)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugtrack_lib::Comment;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn make_test_bug() -> Bug {
        Bug {
            id: "bug-test".to_string(),
            title: "Test title".to_string(),
            description: "Something is off".to_string(),
            priority: Priority::Medium,
            status: Status::Open,
            assigned_to: "Jane Smith".to_string(),
            created_by: "John Doe".to_string(),
            created_at: now() - Duration::days(3),
            updated_at: now() - Duration::hours(2),
            comments: vec![],
        }
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(Status::Open), "○");
        assert_eq!(format_status_icon(Status::InProgress), "◐");
        assert_eq!(format_status_icon(Status::Resolved), "✓");
        assert_eq!(format_status_icon(Status::Closed), "●");
    }

    #[test]
    fn test_format_bug_line() {
        let bug = make_test_bug();
        assert_eq!(
            format_bug_line(&bug),
            "○ bug-test [Medium] Test title (Jane Smith)"
        );
    }

    #[test]
    fn test_format_bug_line_unassigned() {
        let mut bug = make_test_bug();
        bug.assigned_to.clear();
        bug.status = Status::InProgress;
        assert_eq!(format_bug_line(&bug), "◐ bug-test [Medium] Test title");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters count as two columns.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(format_relative_time(now(), now()), "just now");
        assert_eq!(
            format_relative_time(now() - Duration::minutes(1), now()),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time(now() - Duration::hours(5), now()),
            "5 hours ago"
        );
        assert_eq!(
            format_relative_time(now() - Duration::days(3), now()),
            "3 days ago"
        );
        assert_eq!(
            format_relative_time(now() - Duration::days(400), now()),
            "1 year ago"
        );
        // Clock skew never yields negative phrasing.
        assert_eq!(
            format_relative_time(now() + Duration::hours(1), now()),
            "just now"
        );
    }

    #[test]
    fn test_bug_details_lists_comments_in_order() {
        let mut bug = make_test_bug();
        bug.comments = vec![
            Comment {
                id: "1".to_string(),
                text: "First".to_string(),
                author: "Mike Johnson".to_string(),
                created_at: now() - Duration::days(2),
            },
            Comment {
                id: "2".to_string(),
                text: "Second".to_string(),
                author: "Emily Davis".to_string(),
                created_at: now() - Duration::days(1),
            },
        ];
        let details = format_bug_details(&bug, now());

        assert!(details.contains("Created:     3 days ago"));
        assert!(details.contains("Updated:     2 hours ago"));
        assert!(details.contains("Comments (2):"));
        let first = details.find("First").unwrap();
        let second = details.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_bug_details_without_comments() {
        let details = format_bug_details(&make_test_bug(), now());
        assert!(details.contains("No comments yet."));
        assert!(details.contains("Assigned to: Jane Smith"));
    }

    #[test]
    fn test_dashboard_empty() {
        let dashboard = Dashboard::build(&[], 5, 5);
        let text = format_dashboard(&dashboard, now());
        assert!(text.starts_with("Total bugs: 0"));
        assert!(text.contains("In Progress"));
        assert!(text.contains("Critical"));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_dashboard_counts() {
        let mut second = make_test_bug();
        second.id = "bug-two".to_string();
        second.priority = Priority::Critical;
        let bugs = vec![make_test_bug(), second];

        let text = format_dashboard(&Dashboard::build(&bugs, 5, 5), now());
        assert!(text.contains("Total bugs: 2"));
        assert!(text.contains("Jane Smith"));
        assert!(text.contains(" 50.0%"));
        assert!(text.contains("bug-two"));
    }
}
