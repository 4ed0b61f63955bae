//! Domain models for the todo store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::Serialize;

use crate::db::{DbError, DbResult};

/// Store-assigned integer ID.
pub type Id = i64;

/// A titled, completable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: Id,
    pub title: String,
    pub completed: bool,
}

/// Check that a title is usable for a todo.
///
/// The store itself accepts any string; this is the boundary check applied
/// before a create or update reaches it. Only the empty string is rejected;
/// whitespace is ordinary text.
pub fn validate_title(title: &str) -> DbResult<()> {
    if title.is_empty() {
        return Err(DbError::Validation {
            message: "title must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Completion filter for list queries.
///
/// Parsing never fails: anything that is not `completed` or `incomplete`
/// selects every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// Parse a query value, falling back to [`StatusFilter::All`].
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("completed") => StatusFilter::Completed,
            Some("incomplete") => StatusFilter::Incomplete,
            _ => StatusFilter::All,
        }
    }

    /// The `completed` flag this filter selects, or `None` for all records.
    pub fn completed(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some(true),
            StatusFilter::Incomplete => Some(false),
        }
    }
}
