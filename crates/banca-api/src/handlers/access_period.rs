//! Access period handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use banca_core::error::AppError;
use banca_entity::{AccessPeriod, AccessPeriodExample};

use crate::dto::response::OpenStatusResponse;
use crate::extractors::path::parse_action;
use crate::extractors::{ApiJson, ApiQuery, Pagination};
use crate::state::AppState;

/// Query for the open-status check.
#[derive(Debug, Deserialize)]
pub struct OpenQuery {
    /// Instant to check; defaults to now.
    pub instante: Option<DateTime<Utc>>,
}

/// POST /periodoAcesso/buscar
pub async fn search(
    State(state): State<AppState>,
    Pagination(page): Pagination,
    ApiJson(example): ApiJson<AccessPeriodExample>,
) -> Result<Json<Vec<AccessPeriod>>, AppError> {
    let periods = state.access_period_service.search(&example, page).await?;
    Ok(Json(periods))
}

/// POST /periodoAcesso/persistir
pub async fn persist(
    State(state): State<AppState>,
    ApiJson(period): ApiJson<AccessPeriod>,
) -> Result<Json<AccessPeriod>, AppError> {
    let stored = state.access_period_service.persist(period).await?;
    Ok(Json(stored))
}

/// GET /periodoAcesso/listar
pub async fn list(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<Vec<AccessPeriod>>, AppError> {
    let periods = state.access_period_service.list(page).await?;
    Ok(Json(periods))
}

/// GET /periodoAcesso/obter/{codigo}
pub async fn obtain(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<AccessPeriod>, AppError> {
    let action = parse_action(&codigo)?;
    let period = state.access_period_service.obtain(action).await?;
    Ok(Json(period))
}

/// PUT /periodoAcesso/alterar
pub async fn update(
    State(state): State<AppState>,
    ApiJson(period): ApiJson<AccessPeriod>,
) -> Result<Json<AccessPeriod>, AppError> {
    let updated = state.access_period_service.update(period).await?;
    Ok(Json(updated))
}

/// DELETE /periodoAcesso/excluir/{codigo}
pub async fn delete(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<AccessPeriod>, AppError> {
    let action = parse_action(&codigo)?;
    let deleted = state.access_period_service.delete(action).await?;
    Ok(Json(deleted))
}

/// GET /periodoAcesso/aberto/{codigo}
pub async fn is_open(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
    ApiQuery(query): ApiQuery<OpenQuery>,
) -> Result<Json<OpenStatusResponse>, AppError> {
    let action = parse_action(&codigo)?;
    let instante = query.instante.unwrap_or_else(Utc::now);
    let aberto = state.access_period_service.is_open(action, instante).await?;
    Ok(Json(OpenStatusResponse {
        codigo: action,
        aberto,
        instante,
    }))
}
