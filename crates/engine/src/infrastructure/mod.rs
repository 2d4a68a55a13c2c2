//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod config_store;
pub mod ports;
pub mod scripted_host;
pub mod settings;
pub mod variation;

/// Lock an adapter's state, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
