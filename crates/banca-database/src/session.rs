//! Storage session: the unit of work repository calls run in.

use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::debug;

use banca_core::error::{AppError, ErrorKind};

/// An open transaction on a pooled connection.
///
/// Dropping a session without calling [`StorageSession::commit`] rolls
/// every change made through it back.
#[derive(Debug)]
pub struct StorageSession {
    tx: Transaction<'static, Sqlite>,
}

impl StorageSession {
    pub(crate) fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    /// Connection the session's statements execute on.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Make the session's changes durable.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit storage session", e)
        })?;
        debug!("Storage session committed");
        Ok(())
    }

    /// Discard the session's changes.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back storage session", e)
        })?;
        debug!("Storage session rolled back");
        Ok(())
    }
}
