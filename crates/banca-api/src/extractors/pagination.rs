//! Pagination query parameter extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use banca_core::error::AppError;
use banca_core::types::PageRequest;

use super::query::ApiQuery;

/// Page size used when `page` is given without `per_page` or `limit`.
pub const DEFAULT_PER_PAGE: u64 = 25;

/// Query parameters for windowed endpoints.
///
/// Either `offset`/`limit` or `page`/`per_page` may be used; with neither,
/// the window covers every row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows to skip.
    pub offset: Option<u64>,
    /// Maximum rows to return.
    pub limit: Option<u64>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Rows per page.
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        match self.page {
            Some(_) if self.offset.is_some() => Err(AppError::validation(
                "Use either offset or page, not both",
            )),
            Some(0) => Err(AppError::validation("Page numbers start at 1")),
            Some(page) => {
                let size = self.per_page.or(self.limit).unwrap_or(DEFAULT_PER_PAGE);
                Ok(PageRequest::page(page, size))
            }
            None => Ok(PageRequest {
                offset: self.offset.unwrap_or(0),
                limit: self.limit.or(self.per_page),
            }),
        }
    }
}

/// Extracts the result window from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiQuery(params) = ApiQuery::<PaginationParams>::from_request_parts(parts, state).await?;
        Ok(Self(params.into_page_request()?))
    }
}
