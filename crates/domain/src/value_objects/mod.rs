//! Value objects.

mod action_label;

pub use action_label::{is_eligible, ActionLabel, ACTIVE_MARKER, ELIGIBLE_PREFIXES};
