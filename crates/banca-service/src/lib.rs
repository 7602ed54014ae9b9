//! # banca-service
//!
//! Business logic service layer for Banca. Each service operation opens
//! one storage session, runs the repository calls it needs inside it and
//! commits on success; any error drops the session, rolling it back.
//!
//! Services follow constructor injection: the pool and repositories are
//! provided at construction time.

pub mod access_period;
pub mod board;

pub use access_period::AccessPeriodService;
pub use board::BoardService;
