//! # MindMate Storage
//!
//! In-memory tables for sessions, messages, mood entries, and the seeded
//! exercise catalogue. No persistence and no eviction; the store lives
//! and dies with the process.

pub mod memory;
pub mod seed;

pub use memory::{IdSequence, MemStorage};
