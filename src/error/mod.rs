//! Error handling
//!
//! Defines error types and handling for the login flow and the binary.

pub mod handlers;
pub mod types;

pub use types::*;
