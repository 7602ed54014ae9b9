//! Pagination descriptor bounding the result window of searches.

use serde::{Deserialize, Serialize};

/// Request parameters bounding a query's result set.
///
/// The window is applied after predicate filtering: `offset` rows are
/// skipped, then at most `limit` rows are returned. A missing `limit`
/// means "every remaining row".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of matching rows to skip.
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of rows to return (`None` = unbounded).
    #[serde(default)]
    pub limit: Option<u64>,
}

impl PageRequest {
    /// Create a window starting at `offset` returning at most `limit` rows.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    /// A window covering every row.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a window from a 1-based page number and a page size.
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            offset: page.saturating_sub(1).saturating_mul(page_size),
            limit: Some(page_size),
        }
    }

    /// Whether the window can never contain a row.
    pub fn is_empty_window(&self) -> bool {
        self.limit == Some(0)
    }

    /// `LIMIT` value for SQL engines that use `-1` for "no limit".
    pub fn sql_limit(&self) -> i64 {
        self.limit
            .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX))
            .unwrap_or(-1)
    }

    /// `OFFSET` value as a bindable integer.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}
