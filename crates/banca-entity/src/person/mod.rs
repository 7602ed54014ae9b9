//! Person references owned by the academic domain.

pub mod model;

pub use model::Person;
