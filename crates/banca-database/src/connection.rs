//! SQLite connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use banca_core::config::DatabaseConfig;
use banca_core::error::{AppError, ErrorKind};

use crate::session::StorageSession;

/// Wrapper around the sqlx SQLite connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    ///
    /// File databases get their parent directory created on demand.
    /// In-memory databases are pinned to a single long-lived connection
    /// so the schema survives for the lifetime of the pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %redact_query(&config.url),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to SQLite"
        );

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid database url: {e}"),
                    e,
                )
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds));

        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            let parent = options
                .get_filename()
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty());
            if let Some(parent) = parent {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to create database directory {}", parent.display()),
                        e,
                    )
                })?;
            }
            pool_options = pool_options
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

        info!("Successfully connected to SQLite");
        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a storage session (transaction) on a pooled connection.
    pub async fn begin(&self) -> Result<StorageSession, AppError> {
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin storage session", e)
        })?;
        Ok(StorageSession::new(tx))
    }

    /// Open a storage session that takes the write lock up front.
    ///
    /// Every session that writes starts here. A deferred session that reads
    /// first cannot wait for the lock upgrade and fails with `SQLITE_BUSY`.
    pub async fn begin_write(&self) -> Result<StorageSession, AppError> {
        let tx = self.pool.begin_with("BEGIN IMMEDIATE").await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin write session", e)
        })?;
        Ok(StorageSession::new(tx))
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Strip the query string of a database URL for logging.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
