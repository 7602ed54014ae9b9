//! # banca-entity
//!
//! Domain entity models for Banca. Every struct in this crate represents a
//! database table row, a domain value object, or a query example. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; the
//! JSON field names follow the REST contract (`codigo`, `inicio`, ...).
//!
//! Entities compare by identifier only: two access periods are equal when
//! they share the same action, two boards when they share the same id.

pub mod access_period;
pub mod board;
pub mod person;

pub use access_period::{AccessPeriod, AccessPeriodExample, Action};
pub use board::{Board, BoardExample, BoardKind, CreateBoard, Work};
pub use person::Person;
