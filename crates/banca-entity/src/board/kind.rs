//! Board kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of examination a board sits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardKind {
    /// Qualification exam of the work in progress.
    Qualificacao,
    /// Final defense.
    Defesa,
}

impl BoardKind {
    /// Return the kind as its stored constant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qualificacao => "QUALIFICACAO",
            Self::Defesa => "DEFESA",
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BoardKind {
    type Err = banca_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QUALIFICACAO" => Ok(Self::Qualificacao),
            "DEFESA" => Ok(Self::Defesa),
            _ => Err(banca_core::AppError::validation(format!(
                "Invalid board kind: '{s}'. Expected one of: QUALIFICACAO, DEFESA"
            ))),
        }
    }
}
