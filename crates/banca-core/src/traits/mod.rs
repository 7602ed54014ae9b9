//! Core traits defined in `banca-core` and implemented by other crates.

pub mod example;
pub mod repository;

pub use example::Example;
pub use repository::Repository;
