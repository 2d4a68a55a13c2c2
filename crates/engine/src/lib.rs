//! Left Click engine library.
//!
//! Lets a player pick which action runs on left click for items in the bank
//! and the inventory beside it.
//!
//! ## Structure
//!
//! - `entities/` - Identity normalization and the preference store
//! - `use_cases/` - Menu rewriting and the customization mode controller
//! - `infrastructure/` - Host ports plus file, in-memory and scripted adapters
//! - `api/` - Scripted replay entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Session-level tests over a fully wired app.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, Ports};
