//! # banca-core
//!
//! Core crate for Banca. Contains the repository and example traits,
//! configuration schemas, pagination/sorting/filter types used to build
//! example queries, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Banca crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
