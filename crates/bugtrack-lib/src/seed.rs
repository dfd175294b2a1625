//! First-run demo data.
//!
//! The shape is fixed (eight bugs covering every status and priority);
//! assignees, reporters and comments are drawn at random.

use std::collections::HashSet;

use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::{Bug, Comment, Priority, Status};
use crate::util::{advance_timestamp, generate_id};

/// Demo team members used for assignees, reporters and comment authors.
pub const DEMO_USERS: [&str; 6] = [
    "John Doe",
    "Jane Smith",
    "Mike Johnson",
    "Sarah Wilson",
    "David Brown",
    "Emily Davis",
];

const TEMPLATES: [(&str, &str, Priority, Status); 8] = [
    (
        "Login page not responsive on mobile",
        "The login form overflows the viewport on screens narrower than 375px.",
        Priority::High,
        Status::Open,
    ),
    (
        "Database connection timeout",
        "API requests fail with a connection timeout under moderate load.",
        Priority::Critical,
        Status::InProgress,
    ),
    (
        "Typo in footer copyright",
        "The footer reads 'Copyrigth' instead of 'Copyright'.",
        Priority::Low,
        Status::Resolved,
    ),
    (
        "Search results ignore filters",
        "Applying a category filter after searching returns unfiltered results.",
        Priority::Medium,
        Status::Closed,
    ),
    (
        "Password reset email not sent",
        "Users requesting a password reset never receive the email.",
        Priority::Critical,
        Status::Open,
    ),
    (
        "Dashboard charts render blank in Safari",
        "Charts on the dashboard show an empty canvas in Safari 17.",
        Priority::Medium,
        Status::InProgress,
    ),
    (
        "CSV export truncates long fields",
        "Text fields longer than 255 characters are cut off in exported CSV files.",
        Priority::High,
        Status::Resolved,
    ),
    (
        "Tooltip overlaps dropdown menu",
        "Hovering the help icon shows a tooltip that covers the account dropdown.",
        Priority::Low,
        Status::Closed,
    ),
];

const COMMENT_SNIPPETS: [&str; 6] = [
    "I can reproduce this on the latest build.",
    "Looking into it now.",
    "This seems related to the recent dependency upgrade.",
    "Added logs to narrow down the cause.",
    "Fix is ready for review.",
    "Confirmed fixed on staging.",
];

/// Generate the demo bug set.
///
/// Every timestamp is at or after the call instant and strictly increases
/// in generation order.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<Bug> {
    let mut ids: HashSet<String> = HashSet::new();
    let mut bugs = Vec::with_capacity(TEMPLATES.len());
    let mut clock = Utc::now();

    for (title, description, priority, status) in TEMPLATES {
        let assigned_to = pick_user(rng);
        let created_by = pick_user(rng);
        let created_at = clock;

        let id = generate_id(title, description, &created_by, created_at, ids.len(), |id| {
            ids.contains(id)
        });
        ids.insert(id.clone());

        let comment_count = rng.random_range(0..=2);
        let mut comments = Vec::with_capacity(comment_count);
        for comment_id in 1..=comment_count {
            clock = advance_timestamp(clock);
            comments.push(Comment {
                id: comment_id.to_string(),
                text: (*COMMENT_SNIPPETS.choose(rng).unwrap_or(&COMMENT_SNIPPETS[0])).to_string(),
                author: pick_user(rng),
                created_at: clock,
            });
        }

        bugs.push(Bug {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status,
            assigned_to,
            created_by,
            created_at,
            updated_at: clock,
            comments,
        });

        clock = advance_timestamp(clock);
    }

    bugs
}

/// [`generate`] with the thread-local RNG.
#[must_use]
pub fn generate_demo_bugs() -> Vec<Bug> {
    generate(&mut rand::rng())
}

fn pick_user<R: Rng + ?Sized>(rng: &mut R) -> String {
    (*DEMO_USERS.choose(rng).unwrap_or(&DEMO_USERS[0])).to_string()
}
