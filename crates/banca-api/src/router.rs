//! Route definitions for the Banca HTTP API.
//!
//! Routes are grouped by resource. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(access_period_routes())
        .merge(board_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(
                    middleware::logging::request_logging,
                ))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Access period endpoints
fn access_period_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/periodoAcesso/buscar",
            post(handlers::access_period::search),
        )
        .route(
            "/periodoAcesso/persistir",
            post(handlers::access_period::persist),
        )
        .route("/periodoAcesso/listar", get(handlers::access_period::list))
        .route(
            "/periodoAcesso/obter/{codigo}",
            get(handlers::access_period::obtain),
        )
        .route(
            "/periodoAcesso/alterar",
            put(handlers::access_period::update),
        )
        .route(
            "/periodoAcesso/excluir/{codigo}",
            delete(handlers::access_period::delete),
        )
        .route(
            "/periodoAcesso/aberto/{codigo}",
            get(handlers::access_period::is_open),
        )
}

/// Board endpoints
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/banca/buscar", post(handlers::board::search))
        .route("/banca/persistir", post(handlers::board::persist))
        .route("/banca/listar", get(handlers::board::list))
        .route("/banca/obter/{codigo}", get(handlers::board::obtain))
        .route("/banca/alterar", put(handlers::board::update))
        .route("/banca/excluir/{codigo}", delete(handlers::board::delete))
        .route("/banca/{codigo}/membros", post(handlers::board::add_member))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
