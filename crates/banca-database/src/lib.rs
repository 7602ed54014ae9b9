//! # banca-database
//!
//! SQLite connection management, the storage session (unit of work),
//! example-driven query building and concrete repository implementations
//! for all Banca entities.

pub mod connection;
pub mod error;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod session;

pub use connection::DatabasePool;
pub use session::StorageSession;
