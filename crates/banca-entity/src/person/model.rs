//! Person reference.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A person as seen by this domain: an opaque identity plus an optional
/// display name. The academic records behind the id live elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Identifier in the academic domain.
    #[serde(rename = "codigo")]
    pub id: i64,
    /// Display name.
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Person {
    /// Create a person reference with a display name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Create a bare identity reference.
    pub fn with_id(id: i64) -> Self {
        Self { id, name: None }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
