//! Access period management.

pub mod service;

pub use service::AccessPeriodService;
