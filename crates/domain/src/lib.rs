//! Left Click Domain - vocabulary for the left-click action preference engine.
//!
//! Pure types only: no I/O, no host access. The engine crate wires these
//! to the host through port traits.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{
    AffordanceKind, EntryKind, MenuAffordance, MenuEntry, PreferenceAction, PreferenceCommand,
    LEFT_CLICK_TARGET, RESET_OPTION,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{CanonicalItemId, ItemId, WidgetId};

pub use types::{ContainerKind, ContainerWidgets, CustomizationMode};

pub use value_objects::{is_eligible, ActionLabel, ACTIVE_MARKER, ELIGIBLE_PREFIXES};
