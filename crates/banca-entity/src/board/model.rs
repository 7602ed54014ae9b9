//! Board entity model.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::person::Person;

use super::kind::BoardKind;
use super::work::Work;

/// A thesis-defense board.
///
/// The member set is keyed by person identity, so a person sits on a
/// board at most once. Members serialize ordered by person id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Storage-assigned identifier.
    #[serde(rename = "codigo")]
    pub id: i64,
    /// Kind of examination.
    #[serde(rename = "tipo")]
    pub kind: BoardKind,
    /// The work under evaluation.
    #[serde(rename = "trabalho", default)]
    pub work: Option<Work>,
    /// Board members.
    #[serde(rename = "membros", default)]
    pub members: BTreeSet<Person>,
}

impl Board {
    /// Create a board with no members.
    pub fn new(id: i64, kind: BoardKind, work: Option<Work>) -> Self {
        Self {
            id,
            kind,
            work,
            members: BTreeSet::new(),
        }
    }

    /// Add a member. Returns `false` when the person already sits on the board.
    pub fn add_member(&mut self, person: Person) -> bool {
        self.members.insert(person)
    }

    /// Whether the person sits on the board.
    pub fn has_member(&self, person: &Person) -> bool {
        self.members.contains(person)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Data required to create a new board; the id is assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoard {
    /// Kind of examination.
    #[serde(rename = "tipo")]
    pub kind: BoardKind,
    /// The work under evaluation.
    #[serde(rename = "trabalho", default)]
    pub work: Option<Work>,
    /// Initial members.
    #[serde(rename = "membros", default)]
    pub members: BTreeSet<Person>,
}

impl CreateBoard {
    /// Build the stored board once an id has been assigned.
    pub fn into_board(self, id: i64) -> Board {
        Board {
            id,
            kind: self.kind,
            work: self.work,
            members: self.members,
        }
    }
}
