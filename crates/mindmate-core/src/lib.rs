//! # MindMate Core
//!
//! Shared foundations for the MindMate companion service: configuration,
//! the error type, domain types, and the provider trait every LLM backend
//! implements.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{MindmateError, Result};
