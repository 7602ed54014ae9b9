//! Typed path parameter helpers.

use std::str::FromStr;

use banca_core::error::AppError;
use banca_entity::Action;

/// Parses an action code from a path segment.
pub fn parse_action(s: &str) -> Result<Action, AppError> {
    Action::from_str(s)
}

/// Parses a numeric identifier from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid identifier: {s}")))
}
