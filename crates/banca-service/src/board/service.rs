//! Board CRUD and membership.

use std::sync::Arc;

use tracing::info;

use banca_core::error::AppError;
use banca_core::traits::Repository;
use banca_core::types::PageRequest;
use banca_database::DatabasePool;
use banca_database::repositories::BoardRepository;
use banca_entity::{Board, BoardExample, CreateBoard, Person};

/// Manages boards and their members.
#[derive(Debug, Clone)]
pub struct BoardService {
    /// Connection pool sessions are opened on.
    db: DatabasePool,
    /// Board repository.
    repo: Arc<BoardRepository>,
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(db: DatabasePool, repo: Arc<BoardRepository>) -> Self {
        Self { db, repo }
    }

    /// Finds the boards matching the example inside the page window.
    pub async fn search(
        &self,
        example: &BoardExample,
        page: PageRequest,
    ) -> Result<Vec<Board>, AppError> {
        let mut session = self.db.begin().await?;
        let boards = self.repo.search(&mut session, example, &page).await?;
        session.commit().await?;
        Ok(boards)
    }

    /// Lists every board inside the page window.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<Board>, AppError> {
        self.search(&BoardExample::default(), page).await
    }

    /// Stores a new board; the id is assigned by storage.
    pub async fn persist(&self, new: CreateBoard) -> Result<Board, AppError> {
        let mut session = self.db.begin_write().await?;
        let board = self.repo.persist(&mut session, &new).await?;
        session.commit().await?;

        info!(
            board_id = board.id,
            kind = %board.kind,
            members = board.member_count(),
            "Board created"
        );
        Ok(board)
    }

    /// Gets a board by id.
    pub async fn obtain(&self, id: i64) -> Result<Board, AppError> {
        let mut session = self.db.begin().await?;
        let board = self.repo.obtain(&mut session, &id).await?;
        session.commit().await?;
        Ok(board)
    }

    /// Replaces kind, work and members of an existing board.
    pub async fn update(&self, board: Board) -> Result<Board, AppError> {
        let mut session = self.db.begin_write().await?;
        let updated = self.repo.update(&mut session, &board).await?;
        session.commit().await?;

        info!(board_id = updated.id, kind = %updated.kind, "Board updated");
        Ok(updated)
    }

    /// Removes a board, returning what it held.
    pub async fn delete(&self, id: i64) -> Result<Board, AppError> {
        let mut session = self.db.begin_write().await?;
        let deleted = self.repo.delete(&mut session, &id).await?;
        session.commit().await?;

        info!(board_id = deleted.id, "Board deleted");
        Ok(deleted)
    }

    /// Adds a person to a board; `false` when they already sit on it.
    pub async fn add_member(&self, board_id: i64, person: Person) -> Result<bool, AppError> {
        let mut session = self.db.begin_write().await?;
        let added = self.repo.add_member(&mut session, board_id, &person).await?;
        session.commit().await?;

        info!(board_id, person_id = person.id, added, "Board member added");
        Ok(added)
    }
}
