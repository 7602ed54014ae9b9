//! Action kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The step of the board selection process an access period opens.
///
/// Each action has at most one access period, so the action doubles as
/// the period's identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Registration of works and proposals.
    Cadastramento,
    /// Selection of board members.
    Escolha,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 2] = [Self::Cadastramento, Self::Escolha];

    /// Return the action as its stored constant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cadastramento => "CADASTRAMENTO",
            Self::Escolha => "ESCOLHA",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = banca_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CADASTRAMENTO" => Ok(Self::Cadastramento),
            "ESCOLHA" => Ok(Self::Escolha),
            _ => Err(banca_core::AppError::validation(format!(
                "Invalid action: '{s}'. Expected one of: CADASTRAMENTO, ESCOLHA"
            ))),
        }
    }
}
