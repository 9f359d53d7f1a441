//! somato-scale
//!
//! The measurement normalizer: maps raw clinical measurements and their
//! reference bands onto bounded visual scales. Pure transforms — no I/O,
//! no state.

pub mod age;
pub mod band;
pub mod error;
pub mod format;
pub mod trend;
