//! # banca-api
//!
//! HTTP API layer for Banca built on Axum.
//!
//! Provides the access period and board REST endpoints, the health probe,
//! middleware (request logging with request ids, CORS), extractors that
//! report malformed input as `AppError`, DTOs, and validation mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
