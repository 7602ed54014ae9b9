//! Access period repository implementation.

use async_trait::async_trait;

use banca_core::error::AppError;
use banca_core::result::AppResult;
use banca_core::traits::Repository;
use banca_core::types::PageRequest;
use banca_entity::{AccessPeriod, AccessPeriodExample, Action};

use crate::error::db_error;
use crate::query::ExampleQuery;
use crate::session::StorageSession;

const TABLE: &str = "access_periods";
const COLUMNS: &str = "action, starts_at, ends_at";

/// Repository for access period persistence and example queries.
#[derive(Debug, Clone, Default)]
pub struct AccessPeriodRepository;

impl AccessPeriodRepository {
    /// Create a new access period repository.
    pub fn new() -> Self {
        Self
    }

    /// Find the period of an action, if one is stored.
    pub async fn find_by_action(
        &self,
        session: &mut StorageSession,
        action: Action,
    ) -> AppResult<Option<AccessPeriod>> {
        sqlx::query_as::<_, AccessPeriod>(
            "SELECT action, starts_at, ends_at FROM access_periods WHERE action = ?",
        )
        .bind(action)
        .fetch_optional(session.connection())
        .await
        .map_err(|e| db_error("Failed to find access period by action", e))
    }

    /// Stored periods of other actions that overlap `period`.
    pub async fn find_overlapping(
        &self,
        session: &mut StorageSession,
        period: &AccessPeriod,
    ) -> AppResult<Vec<AccessPeriod>> {
        let others = sqlx::query_as::<_, AccessPeriod>(
            "SELECT action, starts_at, ends_at FROM access_periods WHERE action <> ? ORDER BY action ASC",
        )
        .bind(period.action)
        .fetch_all(session.connection())
        .await
        .map_err(|e| db_error("Failed to list access periods", e))?;

        Ok(others.into_iter().filter(|other| other.overlaps(period)).collect())
    }
}

#[async_trait]
impl Repository for AccessPeriodRepository {
    type Entity = AccessPeriod;
    type Id = Action;
    type Example = AccessPeriodExample;
    type New = AccessPeriod;
    type Session = StorageSession;

    async fn search(
        &self,
        session: &mut StorageSession,
        example: &AccessPeriodExample,
        page: &PageRequest,
    ) -> AppResult<Vec<AccessPeriod>> {
        let query = ExampleQuery::new(TABLE, COLUMNS, example, page)?;
        if query.is_empty_window() {
            return Ok(Vec::new());
        }

        let mut builder = query.builder();
        builder
            .build_query_as::<AccessPeriod>()
            .fetch_all(session.connection())
            .await
            .map_err(|e| db_error("Failed to search access periods", e))
    }

    async fn persist(
        &self,
        session: &mut StorageSession,
        period: &AccessPeriod,
    ) -> AppResult<AccessPeriod> {
        if self.find_by_action(session, period.action).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Access period {} already exists",
                period.action
            )));
        }

        sqlx::query_as::<_, AccessPeriod>(
            r#"
            INSERT INTO access_periods (action, starts_at, ends_at)
            VALUES (?, ?, ?)
            RETURNING action, starts_at, ends_at
            "#,
        )
        .bind(period.action)
        .bind(period.starts_at)
        .bind(period.ends_at)
        .fetch_one(session.connection())
        .await
        .map_err(|e| db_error("Failed to persist access period", e))
    }

    async fn obtain(&self, session: &mut StorageSession, action: &Action) -> AppResult<AccessPeriod> {
        self.find_by_action(session, *action)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Access period {action} not found")))
    }

    async fn update(
        &self,
        session: &mut StorageSession,
        period: &AccessPeriod,
    ) -> AppResult<AccessPeriod> {
        sqlx::query_as::<_, AccessPeriod>(
            r#"
            UPDATE access_periods SET starts_at = ?, ends_at = ?
            WHERE action = ?
            RETURNING action, starts_at, ends_at
            "#,
        )
        .bind(period.starts_at)
        .bind(period.ends_at)
        .bind(period.action)
        .fetch_optional(session.connection())
        .await
        .map_err(|e| db_error("Failed to update access period", e))?
        .ok_or_else(|| AppError::not_found(format!("Access period {} not found", period.action)))
    }

    async fn delete(&self, session: &mut StorageSession, action: &Action) -> AppResult<AccessPeriod> {
        sqlx::query_as::<_, AccessPeriod>(
            "DELETE FROM access_periods WHERE action = ? RETURNING action, starts_at, ends_at",
        )
        .bind(*action)
        .fetch_optional(session.connection())
        .await
        .map_err(|e| db_error("Failed to delete access period", e))?
        .ok_or_else(|| AppError::not_found(format!("Access period {action} not found")))
    }
}
