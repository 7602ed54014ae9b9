//! Access period domain entities.

pub mod action;
pub mod example;
pub mod model;

pub use action::Action;
pub use example::AccessPeriodExample;
pub use model::AccessPeriod;
