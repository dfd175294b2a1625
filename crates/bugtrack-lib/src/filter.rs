//! Filtered views over a bug collection.

use crate::model::Bug;
use crate::query::BugFilters;

/// Bugs matching every criterion in `filters`, in input order.
#[must_use]
pub fn filtered_bugs<'a>(bugs: &'a [Bug], filters: &BugFilters) -> Vec<&'a Bug> {
    let search = filters.search.to_lowercase();
    bugs.iter()
        .filter(|bug| matches_filters(bug, filters, &search))
        .collect()
}

/// Whether a single bug passes `filters`.
#[must_use]
pub fn matches(bug: &Bug, filters: &BugFilters) -> bool {
    matches_filters(bug, filters, &filters.search.to_lowercase())
}

fn matches_filters(bug: &Bug, filters: &BugFilters, search_lower: &str) -> bool {
    if filters.status.is_some_and(|status| bug.status != status) {
        return false;
    }

    if filters
        .priority
        .is_some_and(|priority| bug.priority != priority)
    {
        return false;
    }

    if !filters.assigned_to.is_empty() && bug.assigned_to != filters.assigned_to {
        return false;
    }

    if !search_lower.is_empty()
        && !bug.title.to_lowercase().contains(search_lower)
        && !bug.description.to_lowercase().contains(search_lower)
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};
    use chrono::Utc;
    use proptest::prelude::*;

    fn make_bug(id: &str, priority: Priority, status: Status, assignee: &str) -> Bug {
        let now = Utc::now();
        Bug {
            id: id.to_string(),
            title: format!("Title {id}"),
            description: format!("Description of {id}"),
            priority,
            status,
            assigned_to: assignee.to_string(),
            created_by: "Jane Smith".to_string(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    fn ids<'a>(bugs: &[&'a Bug]) -> Vec<&'a str> {
        bugs.iter().map(|b| b.id.as_str()).collect()
    }

    fn sample() -> Vec<Bug> {
        vec![
            make_bug("bug-1", Priority::Critical, Status::Open, "John Doe"),
            make_bug("bug-2", Priority::Low, Status::Open, "Jane Smith"),
            make_bug("bug-3", Priority::High, Status::Resolved, "John Doe"),
        ]
    }

    #[test]
    fn filter_by_priority() {
        let bugs = sample();
        let filters = BugFilters {
            priority: Some(Priority::Critical),
            ..Default::default()
        };
        assert_eq!(ids(&filtered_bugs(&bugs, &filters)), vec!["bug-1"]);
    }

    #[test]
    fn filter_by_status_and_assignee() {
        let bugs = sample();
        let filters = BugFilters {
            status: Some(Status::Open),
            assigned_to: "John Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filtered_bugs(&bugs, &filters)), vec!["bug-1"]);
    }

    #[test]
    fn assignee_match_is_exact() {
        let bugs = sample();
        let filters = BugFilters {
            assigned_to: "john doe".to_string(),
            ..Default::default()
        };
        assert!(filtered_bugs(&bugs, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let mut bugs = sample();
        bugs[0].title = "Login page broken".to_string();
        bugs[2].description = "Happens after LOGIN redirect".to_string();

        let filters = BugFilters {
            search: "LoGiN".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filtered_bugs(&bugs, &filters)), vec!["bug-1", "bug-3"]);
        assert!(matches(&bugs[0], &filters));
        assert!(!matches(&bugs[1], &filters));
    }

    #[test]
    fn all_criteria_are_conjunctive() {
        let bugs = sample();
        let filters = BugFilters {
            status: Some(Status::Resolved),
            priority: Some(Priority::Critical),
            ..Default::default()
        };
        assert!(filtered_bugs(&bugs, &filters).is_empty());
    }

    fn arb_bug() -> impl Strategy<Value = Bug> {
        (
            "[a-z]{1,6}",
            prop::sample::select(Priority::ALL.to_vec()),
            prop::sample::select(Status::ALL.to_vec()),
            prop::sample::select(vec!["John Doe", "Jane Smith", ""]),
            "[a-zA-Z ]{0,12}",
        )
            .prop_map(|(id, priority, status, assignee, title)| {
                let mut bug = make_bug(&id, priority, status, assignee);
                bug.title = title;
                bug
            })
    }

    fn arb_filters() -> impl Strategy<Value = BugFilters> {
        (
            prop::option::of(prop::sample::select(Status::ALL.to_vec())),
            prop::option::of(prop::sample::select(Priority::ALL.to_vec())),
            prop::sample::select(vec!["", "John Doe", "Nobody"]),
            "[a-zA-Z]{0,3}",
        )
            .prop_map(|(status, priority, assignee, search)| BugFilters {
                status,
                priority,
                assigned_to: assignee.to_string(),
                search,
            })
    }

    proptest! {
        #[test]
        fn unfiltered_view_is_identity(bugs in prop::collection::vec(arb_bug(), 0..20)) {
            let view = filtered_bugs(&bugs, &BugFilters::default());
            let expected: Vec<&Bug> = bugs.iter().collect();
            prop_assert_eq!(view, expected);
        }

        #[test]
        fn filtered_view_is_ordered_subset(
            bugs in prop::collection::vec(arb_bug(), 0..20),
            filters in arb_filters(),
        ) {
            let view = filtered_bugs(&bugs, &filters);
            prop_assert!(view.len() <= bugs.len());

            // Every kept bug appears in the input, in the same relative order.
            let mut cursor = 0;
            for kept in &view {
                let offset = bugs[cursor..].iter().position(|b| std::ptr::eq(b, *kept));
                prop_assert!(offset.is_some());
                cursor += offset.unwrap_or(0) + 1;
                prop_assert!(matches(kept, &filters));
            }
        }
    }
}
