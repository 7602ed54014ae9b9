//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use banca_entity::Action;

/// Whether an action's access period is open at an instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenStatusResponse {
    /// The action queried.
    pub codigo: Action,
    /// Whether its period contains the instant.
    pub aberto: bool,
    /// The instant checked.
    pub instante: DateTime<Utc>,
}

/// Outcome of adding a board member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAddedResponse {
    /// `false` when the person already sat on the board.
    pub adicionado: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}
