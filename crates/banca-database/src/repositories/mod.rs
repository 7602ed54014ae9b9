//! Repository implementations for all Banca entities.

pub mod access_period;
pub mod board;

pub use access_period::AccessPeriodRepository;
pub use board::BoardRepository;
