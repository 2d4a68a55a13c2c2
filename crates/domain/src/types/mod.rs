//! Vocabulary types shared by every layer.

mod container;
mod mode;

pub use container::{ContainerKind, ContainerWidgets};
pub use mode::CustomizationMode;
