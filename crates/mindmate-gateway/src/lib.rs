//! # MindMate Gateway
//!
//! HTTP API and embedded chat page. One axum router over shared state:
//! the in-memory store, the knowledge retriever, and the LLM provider.

pub mod routes;
pub mod server;
pub mod ui;

pub use server::{AppState, build_router, start};
