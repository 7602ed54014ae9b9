//! Defense board domain entities.

pub mod example;
pub mod kind;
pub mod model;
pub mod work;

pub use example::{BoardExample, WorkRef};
pub use kind::BoardKind;
pub use model::{Board, CreateBoard};
pub use work::Work;
