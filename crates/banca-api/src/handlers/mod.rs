//! HTTP request handlers.

pub mod access_period;
pub mod board;
pub mod health;
