use bugtrack_lib::{Bug, BugStats, recent_bugs, stats, top_assignees};
use serde::Serialize;

/// Number of bugs assigned to one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeCount {
    pub name: String,
    pub count: usize,
}

/// Dashboard view for the stats command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    #[serde(flatten)]
    pub stats: BugStats,
    pub top_assignees: Vec<AssigneeCount>,
    pub recent_bugs: Vec<&'a Bug>,
}

impl<'a> Dashboard<'a> {
    /// Build the dashboard over `bugs` with the given list sizes.
    #[must_use]
    pub fn build(bugs: &'a [Bug], top: usize, recent: usize) -> Self {
        Self {
            stats: stats(bugs),
            top_assignees: top_assignees(bugs, top)
                .into_iter()
                .map(|(name, count)| AssigneeCount { name, count })
                .collect(),
            recent_bugs: recent_bugs(bugs, recent),
        }
    }
}

/// Result of a delete command.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutput {
    pub id: String,
    pub deleted: bool,
}
