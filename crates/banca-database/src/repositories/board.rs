//! Board repository implementation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::FromRow;

use banca_core::error::AppError;
use banca_core::result::AppResult;
use banca_core::traits::Repository;
use banca_core::types::PageRequest;
use banca_entity::{Board, BoardExample, BoardKind, CreateBoard, Person, Work};

use crate::error::db_error;
use crate::query::ExampleQuery;
use crate::session::StorageSession;

const TABLE: &str = "boards";
const COLUMNS: &str = "id, kind, work_id, work_title";

/// Flat `boards` row; the work is stored inline.
#[derive(Debug, FromRow)]
struct BoardRow {
    id: i64,
    kind: BoardKind,
    work_id: Option<i64>,
    work_title: Option<String>,
}

impl BoardRow {
    fn into_board(self, members: BTreeSet<Person>) -> Board {
        let work = self
            .work_id
            .map(|id| Work::new(id, self.work_title.unwrap_or_default()));
        Board {
            id: self.id,
            kind: self.kind,
            work,
            members,
        }
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    person_id: i64,
    person_name: Option<String>,
}

impl From<MemberRow> for Person {
    fn from(row: MemberRow) -> Self {
        Person {
            id: row.person_id,
            name: row.person_name,
        }
    }
}

/// Repository for boards and their membership.
#[derive(Debug, Clone, Default)]
pub struct BoardRepository;

impl BoardRepository {
    /// Create a new board repository.
    pub fn new() -> Self {
        Self
    }

    /// Add a person to a board.
    ///
    /// Returns `false`, leaving storage untouched, when the person already
    /// sits on the board.
    pub async fn add_member(
        &self,
        session: &mut StorageSession,
        board_id: i64,
        person: &Person,
    ) -> AppResult<bool> {
        let mut board = self.obtain(session, &board_id).await?;
        if !board.add_member(person.clone()) {
            return Ok(false);
        }
        self.insert_member(session, board_id, person).await?;
        Ok(true)
    }

    async fn find_row(&self, session: &mut StorageSession, id: i64) -> AppResult<Option<BoardRow>> {
        sqlx::query_as::<_, BoardRow>(
            "SELECT id, kind, work_id, work_title FROM boards WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(session.connection())
        .await
        .map_err(|e| db_error("Failed to find board by id", e))
    }

    async fn load_members(
        &self,
        session: &mut StorageSession,
        board_id: i64,
    ) -> AppResult<BTreeSet<Person>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT person_id, person_name FROM board_members WHERE board_id = ? ORDER BY person_id",
        )
        .bind(board_id)
        .fetch_all(session.connection())
        .await
        .map_err(|e| db_error("Failed to load board members", e))?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn insert_member(
        &self,
        session: &mut StorageSession,
        board_id: i64,
        person: &Person,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO board_members (board_id, person_id, person_name) VALUES (?, ?, ?)")
            .bind(board_id)
            .bind(person.id)
            .bind(person.name.as_deref())
            .execute(session.connection())
            .await
            .map_err(|e| db_error("Failed to add board member", e))?;
        Ok(())
    }

    async fn clear_members(&self, session: &mut StorageSession, board_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM board_members WHERE board_id = ?")
            .bind(board_id)
            .execute(session.connection())
            .await
            .map_err(|e| db_error("Failed to remove board members", e))?;
        Ok(())
    }
}

#[async_trait]
impl Repository for BoardRepository {
    type Entity = Board;
    type Id = i64;
    type Example = BoardExample;
    type New = CreateBoard;
    type Session = StorageSession;

    async fn search(
        &self,
        session: &mut StorageSession,
        example: &BoardExample,
        page: &PageRequest,
    ) -> AppResult<Vec<Board>> {
        let query = ExampleQuery::new(TABLE, COLUMNS, example, page)?;
        if query.is_empty_window() {
            return Ok(Vec::new());
        }

        let mut builder = query.builder();
        let rows = builder
            .build_query_as::<BoardRow>()
            .fetch_all(session.connection())
            .await
            .map_err(|e| db_error("Failed to search boards", e))?;

        let mut boards = Vec::with_capacity(rows.len());
        for row in rows {
            let members = self.load_members(session, row.id).await?;
            boards.push(row.into_board(members));
        }
        Ok(boards)
    }

    async fn persist(&self, session: &mut StorageSession, new: &CreateBoard) -> AppResult<Board> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (kind, work_id, work_title) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(new.kind)
        .bind(new.work.as_ref().map(|w| w.id))
        .bind(new.work.as_ref().map(|w| w.title.as_str()))
        .fetch_one(session.connection())
        .await
        .map_err(|e| db_error("Failed to persist board", e))?;

        for person in &new.members {
            self.insert_member(session, id, person).await?;
        }

        Ok(new.clone().into_board(id))
    }

    async fn obtain(&self, session: &mut StorageSession, id: &i64) -> AppResult<Board> {
        let row = self
            .find_row(session, *id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Board {id} not found")))?;
        let members = self.load_members(session, row.id).await?;
        Ok(row.into_board(members))
    }

    async fn update(&self, session: &mut StorageSession, board: &Board) -> AppResult<Board> {
        let result = sqlx::query("UPDATE boards SET kind = ?, work_id = ?, work_title = ? WHERE id = ?")
            .bind(board.kind)
            .bind(board.work.as_ref().map(|w| w.id))
            .bind(board.work.as_ref().map(|w| w.title.as_str()))
            .bind(board.id)
            .execute(session.connection())
            .await
            .map_err(|e| db_error("Failed to update board", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Board {} not found", board.id)));
        }

        self.clear_members(session, board.id).await?;
        for person in &board.members {
            self.insert_member(session, board.id, person).await?;
        }

        self.obtain(session, &board.id).await
    }

    async fn delete(&self, session: &mut StorageSession, id: &i64) -> AppResult<Board> {
        let board = self.obtain(session, id).await?;

        self.clear_members(session, *id).await?;
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(*id)
            .execute(session.connection())
            .await
            .map_err(|e| db_error("Failed to delete board", e))?;

        Ok(board)
    }
}
