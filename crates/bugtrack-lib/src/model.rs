//! Core data types for bugtrack-lib.
//!
//! Serialized field names are camelCase so stored collections stay
//! interchangeable with the browser front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BugTrackError;

/// Bug workflow status.
///
/// Unconstrained: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = BugTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in_progress" | "in-progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(BugTrackError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// Bug priority.
///
/// Declared low to high so the derived ordering matches severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BugTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(BugTrackError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// A tracked bug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    /// Unique ID (e.g., "bug-k3x9").
    pub id: String,

    pub title: String,

    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: Status,

    /// Assigned user (free text).
    #[serde(default)]
    pub assigned_to: String,

    /// Reporter (free text).
    #[serde(default)]
    pub created_by: String,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation, never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,

    /// Append-only, in insertion order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Bug {
    /// Next free comment ID within this bug.
    ///
    /// Counts up from `comments.len() + 1`, skipping IDs already taken.
    #[must_use]
    pub fn next_comment_id(&self) -> String {
        let mut n = self.comments.len() + 1;
        loop {
            let candidate = n.to_string();
            if !self.comments.iter().any(|c| c.id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// A note attached to exactly one bug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique within its bug (e.g., "1").
    pub id: String,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a bug or editing it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugFormData {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_display_and_aliases() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("IN-PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
        assert!(matches!(
            "blocked".parse::<Status>(),
            Err(BugTrackError::InvalidStatus { .. })
        ));
    }

    #[test]
    fn priority_parses_case_insensitive() {
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
        assert!(Priority::Critical > Priority::High);
    }

    #[test]
    fn bug_serializes_camel_case_with_labels() {
        let now = Utc::now();
        let bug = Bug {
            id: "bug-abc".to_string(),
            title: "Login broken".to_string(),
            description: "Cannot log in".to_string(),
            priority: Priority::High,
            status: Status::InProgress,
            assigned_to: "John Doe".to_string(),
            created_by: "Jane Smith".to_string(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        };
        let json = serde_json::to_value(&bug).unwrap();
        assert_eq!(json["assignedTo"], "John Doe");
        assert_eq!(json["createdBy"], "Jane Smith");
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["priority"], "High");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn next_comment_id_skips_taken_ids() {
        let now = Utc::now();
        let mut bug = Bug {
            id: "bug-abc".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            priority: Priority::Low,
            status: Status::Open,
            assigned_to: String::new(),
            created_by: String::new(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        };
        assert_eq!(bug.next_comment_id(), "1");
        for id in ["2", "c-9"] {
            bug.comments.push(Comment {
                id: id.to_string(),
                text: "x".to_string(),
                author: "a".to_string(),
                created_at: now,
            });
        }
        assert_eq!(bug.next_comment_id(), "3");

        bug.comments[1].id = "3".to_string();
        assert_eq!(bug.next_comment_id(), "4");
    }

    #[test]
    fn comment_ids_are_json_strings() {
        let json = r#"{
            "id": "1",
            "text": "Seen on staging",
            "author": "Jane Smith",
            "createdAt": "2025-01-15T10:30:00.000Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, "1");
        assert_eq!(serde_json::to_value(&comment).unwrap()["id"], "1");
    }
}
