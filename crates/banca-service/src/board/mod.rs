//! Board management.

pub mod service;

pub use service::BoardService;
