//! Mapping of driver errors into [`AppError`].

use banca_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error with the failed operation's description.
///
/// Unique-constraint violations surface as `Conflict`; everything else
/// is a `Database` failure.
pub fn db_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match err.as_database_error() {
        Some(db) if db.is_unique_violation() => ErrorKind::Conflict,
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, context.to_string(), err)
}
