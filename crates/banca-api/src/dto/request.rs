//! Request DTOs with validation rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use banca_entity::{Board, BoardKind, CreateBoard, Person, Work};

/// Work evaluated by a board.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkRequest {
    /// Work identifier.
    #[serde(rename = "codigo")]
    #[validate(range(min = 1))]
    pub id: i64,
    /// Work title.
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 500))]
    pub title: String,
}

impl From<WorkRequest> for Work {
    fn from(req: WorkRequest) -> Self {
        Work::new(req.id, req.title)
    }
}

/// Person referenced as a board member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonRequest {
    /// Person identifier.
    #[serde(rename = "codigo")]
    #[validate(range(min = 1))]
    pub id: i64,
    /// Display name.
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
}

impl From<PersonRequest> for Person {
    fn from(req: PersonRequest) -> Self {
        Person {
            id: req.id,
            name: req.name,
        }
    }
}

/// Create board request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Kind of examination.
    #[serde(rename = "tipo")]
    pub kind: BoardKind,
    /// Work under evaluation.
    #[serde(rename = "trabalho", default)]
    #[validate(nested)]
    pub work: Option<WorkRequest>,
    /// Initial members; repeated people collapse into one.
    #[serde(rename = "membros", default)]
    #[validate(nested)]
    pub members: Vec<PersonRequest>,
}

impl CreateBoardRequest {
    /// Converts into the entity-level creation data.
    pub fn into_create(self) -> CreateBoard {
        CreateBoard {
            kind: self.kind,
            work: self.work.map(Work::from),
            members: collect_members(self.members),
        }
    }
}

/// Update board request: the full replacement state of an existing board.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    /// Board identifier.
    #[serde(rename = "codigo")]
    pub id: i64,
    /// Kind of examination.
    #[serde(rename = "tipo")]
    pub kind: BoardKind,
    /// Work under evaluation.
    #[serde(rename = "trabalho", default)]
    #[validate(nested)]
    pub work: Option<WorkRequest>,
    /// Members.
    #[serde(rename = "membros", default)]
    #[validate(nested)]
    pub members: Vec<PersonRequest>,
}

impl UpdateBoardRequest {
    /// Converts into the board entity.
    pub fn into_board(self) -> Board {
        Board {
            id: self.id,
            kind: self.kind,
            work: self.work.map(Work::from),
            members: collect_members(self.members),
        }
    }
}

/// Add member request.
pub type AddMemberRequest = PersonRequest;

/// JSON name of a validated request field.
pub(crate) fn json_field_name(field: &str) -> &str {
    match field {
        "id" => "codigo",
        "title" => "titulo",
        "name" => "nome",
        "kind" => "tipo",
        "work" => "trabalho",
        "members" => "membros",
        other => other,
    }
}

fn collect_members(members: Vec<PersonRequest>) -> BTreeSet<Person> {
    members.into_iter().map(Person::from).collect()
}
