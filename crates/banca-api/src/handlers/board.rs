//! Board handlers.

use axum::Json;
use axum::extract::{Path, State};

use banca_core::error::AppError;
use banca_entity::{Board, BoardExample, Person};

use crate::dto::request::{AddMemberRequest, CreateBoardRequest, UpdateBoardRequest};
use crate::dto::response::MemberAddedResponse;
use crate::extractors::path::parse_id;
use crate::extractors::{ApiJson, Pagination, ValidatedJson};
use crate::state::AppState;

/// POST /banca/buscar
pub async fn search(
    State(state): State<AppState>,
    Pagination(page): Pagination,
    ApiJson(example): ApiJson<BoardExample>,
) -> Result<Json<Vec<Board>>, AppError> {
    let boards = state.board_service.search(&example, page).await?;
    Ok(Json(boards))
}

/// POST /banca/persistir
pub async fn persist(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<Json<Board>, AppError> {
    let board = state.board_service.persist(req.into_create()).await?;
    Ok(Json(board))
}

/// GET /banca/listar
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<Vec<Board>>, AppError> {
    let boards = state.board_service.list(page).await?;
    Ok(Json(boards))
}

/// GET /banca/obter/{codigo}
pub async fn obtain(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<Board>, AppError> {
    let board = state.board_service.obtain(parse_id(&codigo)?).await?;
    Ok(Json(board))
}

/// PUT /banca/alterar
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateBoardRequest>,
) -> Result<Json<Board>, AppError> {
    let board = state.board_service.update(req.into_board()).await?;
    Ok(Json(board))
}

/// DELETE /banca/excluir/{codigo}
pub async fn delete(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<Board>, AppError> {
    let board = state.board_service.delete(parse_id(&codigo)?).await?;
    Ok(Json(board))
}

/// POST /banca/{codigo}/membros
pub async fn add_member(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
    ValidatedJson(req): ValidatedJson<AddMemberRequest>,
) -> Result<Json<MemberAddedResponse>, AppError> {
    let board_id = parse_id(&codigo)?;
    let adicionado = state
        .board_service
        .add_member(board_id, Person::from(req))
        .await?;
    Ok(Json(MemberAddedResponse { adicionado }))
}
