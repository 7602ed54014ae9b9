//! Query example for boards.

use serde::{Deserialize, Serialize};

use banca_core::traits::Example;
use banca_core::types::{FilterField, SortField};

use super::kind::BoardKind;

/// Reference to a work by id inside a board example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRef {
    /// Work identifier.
    #[serde(rename = "codigo")]
    pub id: i64,
}

/// Sparse template of a [`Board`](super::Board); unset attributes never filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardExample {
    /// Match the board with this id.
    #[serde(rename = "codigo", default)]
    pub id: Option<i64>,
    /// Match boards of this kind.
    #[serde(rename = "tipo", default)]
    pub kind: Option<BoardKind>,
    /// Match boards evaluating this work.
    #[serde(rename = "trabalho", default)]
    pub work: Option<WorkRef>,
}

impl Example for BoardExample {
    fn predicates(&self) -> Vec<FilterField> {
        let mut predicates = Vec::new();
        if let Some(id) = self.id {
            predicates.push(FilterField::eq("id", id));
        }
        if let Some(kind) = self.kind {
            predicates.push(FilterField::eq("kind", kind.as_str()));
        }
        if let Some(work) = &self.work {
            predicates.push(FilterField::eq("work_id", work.id));
        }
        predicates
    }

    fn ordering() -> Vec<SortField> {
        vec![SortField::asc("id")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_body_is_a_valid_example() {
        let example: BoardExample = serde_json::from_str(
            r#"{"codigo": 2, "tipo": "DEFESA", "trabalho": {"codigo": 7, "titulo": "x"}, "membros": []}"#,
        )
        .unwrap();
        let fields: Vec<_> = example
            .predicates()
            .into_iter()
            .map(|p| p.field)
            .collect();
        assert_eq!(fields, ["id", "kind", "work_id"]);
    }

    #[test]
    fn test_kind_only() {
        let example = BoardExample {
            kind: Some(BoardKind::Qualificacao),
            ..BoardExample::default()
        };
        assert_eq!(example.predicates().len(), 1);
        assert!(BoardExample::default().is_unconstrained());
    }
}
