//! End-to-end session tests.
//!
//! Drive a fully wired [`App`](crate::app::App) through [`Replay`](crate::api::Replay)
//! with scripted containers and real preference stores.
//!
//! ```bash
//! cargo test -p leftclick-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
