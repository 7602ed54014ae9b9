//! Filter types for example-driven query building.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamic filter value bound into a query as a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A text value (also used for enumerated constants).
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A UTC timestamp.
    Timestamp(DateTime<Utc>),
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// An equality condition on a named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The column name to filter on.
    pub field: String,
    /// The value the column must equal.
    pub value: FilterValue,
}

impl FilterField {
    /// Create an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the column is a plain SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`,
    /// optionally qualified with a single table prefix).
    pub fn has_valid_column(&self) -> bool {
        is_valid_column(&self.field)
    }
}

/// Whether `name` can be spliced into SQL as a column reference.
pub fn is_valid_column(name: &str) -> bool {
    let mut parts = name.split('.');
    let valid = parts.by_ref().take(2).all(is_valid_segment);
    valid && parts.next().is_none()
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
