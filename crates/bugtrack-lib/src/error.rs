//! Error types for `bugtrack-lib`.

use thiserror::Error;

/// Primary error type for bugtrack-lib operations.
#[derive(Error, Debug)]
pub enum BugTrackError {
    // === Bug Errors ===
    /// Bug with the specified ID was not found.
    #[error("Bug not found: {id}")]
    BugNotFound { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {}", format_errors(errors))]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority}")]
    InvalidPriority { priority: String },

    // === Lifecycle Errors ===
    /// The store has not finished its initial load.
    #[error("Bug store is still loading")]
    NotReady,

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl BugTrackError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// Field-level messages carried by a validation error, in report order.
    ///
    /// Empty for every other variant.
    #[must_use]
    pub fn field_messages(&self) -> Vec<ValidationError> {
        match self {
            Self::Validation { field, reason } => vec![ValidationError::new(field, reason)],
            Self::ValidationErrors { errors } => errors.clone(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::BugNotFound { .. })
    }
}

/// Result type using `BugTrackError`.
pub type Result<T> = std::result::Result<T, BugTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_validation_error_collapses() {
        let err = BugTrackError::from_validation_errors(vec![ValidationError::new(
            "title",
            "Title is required",
        )]);
        assert!(matches!(err, BugTrackError::Validation { ref field, .. } if field == "title"));
        assert_eq!(err.to_string(), "Validation failed: title: Title is required");
    }

    #[test]
    fn multiple_validation_errors_keep_order() {
        let err = BugTrackError::from_validation_errors(vec![
            ValidationError::new("title", "Title is required"),
            ValidationError::new("description", "Description is required"),
        ]);
        let fields: Vec<String> = err.field_messages().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description"]);
        assert_eq!(
            err.to_string(),
            "Validation errors: title: Title is required; description: Description is required"
        );
    }

    #[test]
    fn field_messages_empty_for_other_variants() {
        assert!(BugTrackError::NotReady.field_messages().is_empty());
        assert!(BugTrackError::BugNotFound { id: "bug-1".into() }.is_not_found());
    }
}
