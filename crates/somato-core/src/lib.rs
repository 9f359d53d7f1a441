//! somato-core
//!
//! Pure domain types and the payload decode boundary. The remote API's JSON
//! is deserialized exactly once, here, into typed optional fields — no
//! dynamic field access survives past this crate.

pub mod dates;
pub mod error;
pub mod locator;
pub mod models;
