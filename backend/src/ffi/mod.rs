//! PyO3 bindings
//!
//! Exposes the engines to Python as plain functions taking and returning
//! dicts. Validation of untrusted input happens here, at the boundary.

pub mod engine;
pub mod types;
