//! Error types for adapter construction.
//!
//! Port calls themselves never fail: the rewrite core treats every missing
//! value as "leave the menu alone". These errors only come out of opening a
//! backing file at startup.

use std::path::PathBuf;

/// Opening or writing a configuration store failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a valid store document.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Loading an item variation table failed.
#[derive(Debug, thiserror::Error)]
pub enum VariationError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid variation table: {0}")]
    Invalid(String),
}

impl VariationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl ToString) -> Self {
        Self::Invalid(message.to_string())
    }
}
