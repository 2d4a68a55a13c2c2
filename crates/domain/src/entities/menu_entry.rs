//! Menu entries and the commands attached to them.
//!
//! A [`MenuEntry`] lives for one menu interaction. The host builds the list,
//! hands it to the engine by `&mut`, and reads it back once the handlers
//! return. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::ids::{CanonicalItemId, WidgetId};
use crate::types::ContainerKind;
use crate::value_objects::{ActionLabel, ACTIVE_MARKER};

/// Target text of the generic left-click affordance.
pub const LEFT_CLICK_TARGET: &str = "Left-click";

/// Option text of the synthetic entry that clears a preference.
pub const RESET_OPTION: &str = "Reset";

/// Host execution classification of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// One of the host's own categories, opaque to the engine.
    Builtin(u16),
    /// Custom category: the attached command governs invocation.
    Managed,
    /// Highest-priority category; never sorted below default candidates.
    Priority,
}

/// What a command does to the stored preference when its entry is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceAction {
    /// Store the clicked entry's label, if it is eligible.
    Record,
    /// Remove the stored preference.
    Reset,
}

/// Tagged command attached to an entry in place of a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceCommand {
    pub item: CanonicalItemId,
    pub container: ContainerKind,
    pub action: PreferenceAction,
}

impl PreferenceCommand {
    pub fn record(item: CanonicalItemId, container: ContainerKind) -> Self {
        Self {
            item,
            container,
            action: PreferenceAction::Record,
        }
    }

    pub fn reset(item: CanonicalItemId, container: ContainerKind) -> Self {
        Self {
            item,
            container,
            action: PreferenceAction::Reset,
        }
    }
}

/// One candidate action in the current menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub option: String,
    pub target: String,
    pub kind: EntryKind,
    /// Slot index inside the container (host `param0`).
    pub slot: i32,
    /// Widget the entry was opened on (host `param1`).
    pub widget: WidgetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<PreferenceCommand>,
}

impl MenuEntry {
    pub fn new(option: impl Into<String>, target: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
            kind,
            slot: -1,
            widget: WidgetId::new(-1),
            command: None,
        }
    }

    /// Point the entry at a container slot.
    pub fn on_slot(mut self, widget: WidgetId, slot: i32) -> Self {
        self.widget = widget;
        self.slot = slot;
        self
    }

    /// Normalized form of the display label.
    pub fn label(&self) -> ActionLabel {
        ActionLabel::normalize(&self.option)
    }

    pub fn is_marked(&self) -> bool {
        self.option.starts_with(ACTIVE_MARKER)
    }

    pub fn mark_active(&mut self) {
        self.option = format!("{}{}", ACTIVE_MARKER, self.option);
    }
}

/// Which customization affordance is shown on the deposit-inventory button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceKind {
    Configure,
    Save,
}

impl AffordanceKind {
    pub fn option(&self) -> &'static str {
        match self {
            AffordanceKind::Configure => "Configure",
            AffordanceKind::Save => "Save",
        }
    }
}

impl std::fmt::Display for AffordanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.option())
    }
}

/// A custom option injected into the host menu system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuAffordance {
    pub kind: AffordanceKind,
    pub target: String,
    pub widget: WidgetId,
}

impl MenuAffordance {
    pub fn new(kind: AffordanceKind, widget: WidgetId) -> Self {
        Self {
            kind,
            target: LEFT_CLICK_TARGET.to_string(),
            widget,
        }
    }

    pub fn option(&self) -> &'static str {
        self.kind.option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;

    #[test]
    fn new_entry_points_nowhere() {
        let entry = MenuEntry::new("Examine", "Coins", EntryKind::Builtin(1005));
        assert_eq!(entry.slot, -1);
        assert_eq!(entry.widget, WidgetId::new(-1));
        assert!(entry.command.is_none());
    }

    #[test]
    fn mark_active_prefixes_marker_once() {
        let mut entry = MenuEntry::new("Withdraw-1", "Coins", EntryKind::Builtin(57));
        assert!(!entry.is_marked());

        entry.mark_active();

        assert_eq!(entry.option, "* Withdraw-1");
        assert!(entry.is_marked());
        assert_eq!(entry.label(), "withdraw-1");
    }

    #[test]
    fn affordances_target_left_click() {
        let widget = WidgetId::new(786474);
        let configure = MenuAffordance::new(AffordanceKind::Configure, widget);
        let save = MenuAffordance::new(AffordanceKind::Save, widget);

        assert_eq!(configure.option(), "Configure");
        assert_eq!(save.option(), "Save");
        assert_eq!(configure.target, LEFT_CLICK_TARGET);
        assert_ne!(configure, save);
    }

    #[test]
    fn entry_deserializes_without_command() {
        let json = r#"{
            "option": "Wield",
            "target": "Rune scimitar",
            "kind": { "builtin": 57 },
            "slot": 3,
            "widget": 983043
        }"#;
        let entry: MenuEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind, EntryKind::Builtin(57));
        assert_eq!(entry.widget, WidgetId::new(983043));
        assert!(entry.command.is_none());
    }

    #[test]
    fn command_constructors_set_action() {
        let item = CanonicalItemId::from_mapped(ItemId::new(1234));
        assert_eq!(
            PreferenceCommand::record(item, ContainerKind::Bank).action,
            PreferenceAction::Record
        );
        assert_eq!(
            PreferenceCommand::reset(item, ContainerKind::Bank).action,
            PreferenceAction::Reset
        );
    }
}
