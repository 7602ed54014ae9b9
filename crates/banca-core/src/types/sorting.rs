//! Sorting types for search results.

use serde::{Deserialize, Serialize};

use super::filter::is_valid_column;

/// An ascending sort on a named column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Column name to sort by.
    pub field: String,
}

impl SortField {
    /// Create an ascending sort on the given column.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Whether the column is a plain SQL identifier.
    pub fn has_valid_column(&self) -> bool {
        is_valid_column(&self.field)
    }

    /// Render as an `ORDER BY` term.
    pub fn as_sql(&self) -> String {
        format!("{} ASC", self.field)
    }
}
