//! Core type definitions used across the Banca workspace.

pub mod filter;
pub mod pagination;
pub mod response;
pub mod sorting;

pub use filter::{FilterField, FilterValue};
pub use pagination::PageRequest;
pub use response::ApiErrorResponse;
pub use sorting::SortField;
