//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use banca_core::config::AppConfig;
use banca_database::DatabasePool;
use banca_database::repositories::{AccessPeriodRepository, BoardRepository};
use banca_service::{AccessPeriodService, BoardService};

/// Application state containing all shared dependencies.
///
/// Cloned into every handler; all fields are cheap reference-counted handles.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Connection pool.
    pub db: DatabasePool,
    /// Access period service.
    pub access_period_service: Arc<AccessPeriodService>,
    /// Board service.
    pub board_service: Arc<BoardService>,
}

impl AppState {
    /// Wire repositories and services over an open pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let access_period_repo = Arc::new(AccessPeriodRepository::new());
        let board_repo = Arc::new(BoardRepository::new());

        let access_period_service = Arc::new(AccessPeriodService::new(
            db.clone(),
            Arc::clone(&access_period_repo),
        ));
        let board_service = Arc::new(BoardService::new(db.clone(), Arc::clone(&board_repo)));

        Self {
            config: Arc::new(config),
            db,
            access_period_service,
            board_service,
        }
    }
}
