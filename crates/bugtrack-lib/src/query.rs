//! Query and update types for bug operations.

use crate::model::{BugFormData, Priority, Status};

/// Fields to update on a bug. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub assigned_to: Option<String>,
}

impl BugUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
    }

    #[must_use]
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<BugFormData> for BugUpdate {
    fn from(form: BugFormData) -> Self {
        Self {
            title: Some(form.title),
            description: Some(form.description),
            priority: Some(form.priority),
            status: None,
            assigned_to: Some(form.assigned_to),
        }
    }
}

/// View criteria for narrowing the bug list.
///
/// `None` / empty means "All" for that criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugFilters {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Exact assignee match.
    pub assigned_to: String,
    /// Case-insensitive substring of title or description.
    pub search: String,
}

impl BugFilters {
    /// True when no criterion narrows the view.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_empty()
            && self.search.is_empty()
    }
}

/// Parse a filter value where "all" (any case) means no filter.
///
/// # Errors
///
/// Returns the parse error of `T` for anything else that does not parse.
pub fn parse_filter<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: std::str::FromStr,
{
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
