//! Menu entities exchanged with the host menu system.

mod menu_entry;

pub use menu_entry::{
    AffordanceKind, EntryKind, MenuAffordance, MenuEntry, PreferenceAction, PreferenceCommand,
    LEFT_CLICK_TARGET, RESET_OPTION,
};
