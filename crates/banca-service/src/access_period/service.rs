//! Access period CRUD with bound and overlap validation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use banca_core::error::AppError;
use banca_core::traits::Repository;
use banca_core::types::PageRequest;
use banca_database::DatabasePool;
use banca_database::StorageSession;
use banca_database::repositories::AccessPeriodRepository;
use banca_entity::{AccessPeriod, AccessPeriodExample, Action};

/// Manages access periods.
#[derive(Debug, Clone)]
pub struct AccessPeriodService {
    /// Connection pool sessions are opened on.
    db: DatabasePool,
    /// Access period repository.
    repo: Arc<AccessPeriodRepository>,
}

impl AccessPeriodService {
    /// Creates a new access period service.
    pub fn new(db: DatabasePool, repo: Arc<AccessPeriodRepository>) -> Self {
        Self { db, repo }
    }

    /// Finds the periods matching the example inside the page window.
    pub async fn search(
        &self,
        example: &AccessPeriodExample,
        page: PageRequest,
    ) -> Result<Vec<AccessPeriod>, AppError> {
        let mut session = self.db.begin().await?;
        let periods = self.repo.search(&mut session, example, &page).await?;
        session.commit().await?;
        Ok(periods)
    }

    /// Lists every period inside the page window.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<AccessPeriod>, AppError> {
        self.search(&AccessPeriodExample::default(), page).await
    }

    /// Stores a new period.
    pub async fn persist(&self, period: AccessPeriod) -> Result<AccessPeriod, AppError> {
        period.validate_bounds()?;

        let mut session = self.db.begin_write().await?;
        self.ensure_no_overlap(&mut session, &period).await?;
        let stored = self.repo.persist(&mut session, &period).await?;
        session.commit().await?;

        info!(
            action = %stored.action,
            starts_at = %stored.starts_at,
            ends_at = %stored.ends_at,
            "Access period created"
        );
        Ok(stored)
    }

    /// Gets the period of an action.
    pub async fn obtain(&self, action: Action) -> Result<AccessPeriod, AppError> {
        let mut session = self.db.begin().await?;
        let period = self.repo.obtain(&mut session, &action).await?;
        session.commit().await?;
        Ok(period)
    }

    /// Replaces the window of an existing period.
    pub async fn update(&self, period: AccessPeriod) -> Result<AccessPeriod, AppError> {
        period.validate_bounds()?;

        let mut session = self.db.begin_write().await?;
        let mut current = self.repo.obtain(&mut session, &period.action).await?;
        current.apply(&period);
        self.ensure_no_overlap(&mut session, &current).await?;
        let updated = self.repo.update(&mut session, &current).await?;
        session.commit().await?;

        info!(
            action = %updated.action,
            starts_at = %updated.starts_at,
            ends_at = %updated.ends_at,
            "Access period updated"
        );
        Ok(updated)
    }

    /// Removes the period of an action, returning what it held.
    pub async fn delete(&self, action: Action) -> Result<AccessPeriod, AppError> {
        let mut session = self.db.begin_write().await?;
        let deleted = self.repo.delete(&mut session, &action).await?;
        session.commit().await?;

        info!(action = %deleted.action, "Access period deleted");
        Ok(deleted)
    }

    /// Whether the action's period contains `at`.
    pub async fn is_open(&self, action: Action, at: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(self.obtain(action).await?.contains(at))
    }

    async fn ensure_no_overlap(
        &self,
        session: &mut StorageSession,
        period: &AccessPeriod,
    ) -> Result<(), AppError> {
        let overlapping = self.repo.find_overlapping(session, period).await?;
        match overlapping.first() {
            Some(other) => Err(AppError::conflict(format!(
                "Access period {} overlaps the {} period ({} to {})",
                period.action, other.action, other.starts_at, other.ends_at
            ))),
            None => Ok(()),
        }
    }
}
