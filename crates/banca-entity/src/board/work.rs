//! Academic work evaluated by a board.

use serde::{Deserialize, Serialize};

/// The work (thesis, dissertation) a board evaluates. Owned by its board
/// and stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Identifier of the work.
    #[serde(rename = "codigo")]
    pub id: i64,
    /// Title of the work.
    #[serde(rename = "titulo")]
    pub title: String,
}

impl Work {
    /// Create a work reference.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
