//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.db.health_check().await {
        Ok(true) => (StatusCode::OK, "connected"),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "unexpected response"),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    };
    (status, Json(body))
}
