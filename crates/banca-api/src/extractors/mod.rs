//! Custom Axum extractors.
//!
//! Every extractor here rejects with [`AppError`](banca_core::AppError),
//! so malformed input gets the same JSON error body as any other failure.

pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use json::{ApiJson, ValidatedJson};
pub use pagination::{Pagination, PaginationParams};
pub use query::ApiQuery;
