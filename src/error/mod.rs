//! Error handling
//!
//! Defines error types for account configuration handling.

pub mod types;

pub use types::*;
