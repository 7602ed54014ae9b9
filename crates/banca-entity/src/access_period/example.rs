//! Query example for access periods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use banca_core::traits::Example;
use banca_core::types::{FilterField, SortField};

use super::action::Action;
use super::model::AccessPeriod;

/// Sparse template of an [`AccessPeriod`]; unset attributes never filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPeriodExample {
    /// Match the period of this action.
    #[serde(rename = "codigo", default)]
    pub action: Option<Action>,
    /// Match periods opening at exactly this instant.
    #[serde(rename = "inicio", default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// Match periods closing at exactly this instant.
    #[serde(rename = "termino", default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl AccessPeriodExample {
    /// Example matching only the period of the given action.
    pub fn for_action(action: Action) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }
}

impl From<&AccessPeriod> for AccessPeriodExample {
    fn from(period: &AccessPeriod) -> Self {
        Self {
            action: Some(period.action),
            starts_at: Some(period.starts_at),
            ends_at: Some(period.ends_at),
        }
    }
}

impl Example for AccessPeriodExample {
    fn predicates(&self) -> Vec<FilterField> {
        let mut predicates = Vec::new();
        if let Some(action) = self.action {
            predicates.push(FilterField::eq("action", action.as_str()));
        }
        if let Some(starts_at) = self.starts_at {
            predicates.push(FilterField::eq("starts_at", starts_at));
        }
        if let Some(ends_at) = self.ends_at {
            predicates.push(FilterField::eq("ends_at", ends_at));
        }
        predicates
    }

    fn ordering() -> Vec<SortField> {
        vec![SortField::asc("action")]
    }
}
