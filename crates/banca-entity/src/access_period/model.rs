//! Access period entity model.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use banca_core::AppError;
use banca_core::result::AppResult;

use super::action::Action;

/// A time window during which an action of the selection process is open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessPeriod {
    /// The action this period opens (primary key, chosen by the caller).
    #[serde(rename = "codigo")]
    pub action: Action,
    /// When the window opens.
    #[serde(rename = "inicio")]
    pub starts_at: DateTime<Utc>,
    /// When the window closes.
    #[serde(rename = "termino")]
    pub ends_at: DateTime<Utc>,
}

impl AccessPeriod {
    /// Create a new access period.
    pub fn new(action: Action, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            action,
            starts_at,
            ends_at,
        }
    }

    /// Ensure the window does not close before it opens.
    pub fn validate_bounds(&self) -> AppResult<()> {
        if self.starts_at > self.ends_at {
            return Err(AppError::validation(format!(
                "Access period {} starts at {} after it ends at {}",
                self.action, self.starts_at, self.ends_at
            )));
        }
        Ok(())
    }

    /// Whether the instant falls inside the window (bounds included).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at <= self.ends_at
    }

    /// Whether the two windows share any instant other than a common edge.
    pub fn overlaps(&self, other: &AccessPeriod) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }

    /// Copy the mutable fields of `other` into this period.
    pub fn apply(&mut self, other: &AccessPeriod) {
        self.starts_at = other.starts_at;
        self.ends_at = other.ends_at;
    }
}

impl PartialEq for AccessPeriod {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action
    }
}

impl Eq for AccessPeriod {}

impl Hash for AccessPeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.action.hash(state);
    }
}
