//! Error handling
//!
//! Defines error types and handling for the realm.

pub mod handlers;
pub mod types;

pub use types::*;
