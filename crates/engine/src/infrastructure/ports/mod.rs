//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Host state (container contents, item variation mapping)
//! - The host menu manager (custom affordances)
//! - Key-value configuration storage (could swap memory -> JSON file -> host config)

mod error;
mod host;
mod storage;

pub use error::{StoreError, VariationError};
pub use host::{ContainerContentsPort, MenuManagerPort};
pub use storage::{ConfigStorePort, ItemVariationPort};

#[cfg(test)]
pub use host::{MockContainerContentsPort, MockMenuManagerPort};
#[cfg(test)]
pub use storage::{MockConfigStorePort, MockItemVariationPort};
