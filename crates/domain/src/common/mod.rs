//! Common utility functions shared across the domain and the engine.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **No dependencies** - plain string handling

pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use string::{none_if_empty, remove_tags};
