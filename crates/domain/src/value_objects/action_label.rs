//! Normalized action labels and the eligibility allow-list.
//!
//! A menu option such as `"* Withdraw-1"` normalizes to `"withdraw-1"`: the
//! active-preference marker is removed and the text is lowercased. Stored
//! preferences and entry comparisons both use the normalized form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix added to the display label of the entry matching the stored preference.
pub const ACTIVE_MARKER: &str = "* ";

/// Label prefixes that may become a left-click action.
///
/// Only state-changing, equip and consume actions qualify; "examine" or
/// "cancel" never do.
pub const ELIGIBLE_PREFIXES: [&str; 11] = [
    "withdraw-",
    "deposit-",
    "wield",
    "wear",
    "equip",
    "hold",
    "eat",
    "drink",
    "fill",
    "empty",
    "placeholder",
];

/// A case-folded, marker-free action label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLabel(String);

impl ActionLabel {
    /// Normalize a raw host menu option.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.replace(ACTIVE_MARKER, "").to_lowercase())
    }

    /// Wrap a value read back from the preference store.
    ///
    /// Stored values were normalized when written, so they are kept verbatim.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label may be recorded as a left-click preference.
    pub fn is_eligible(&self) -> bool {
        ELIGIBLE_PREFIXES
            .iter()
            .any(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ActionLabel> for String {
    fn from(label: ActionLabel) -> String {
        label.0
    }
}

impl PartialEq<str> for ActionLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize `raw` and check it against the allow-list.
pub fn is_eligible(raw: &str) -> bool {
    ActionLabel::normalize(raw).is_eligible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_marker_and_lowercases() {
        assert_eq!(ActionLabel::normalize("* Withdraw-1"), "withdraw-1");
        assert_eq!(ActionLabel::normalize("Withdraw-All"), "withdraw-all");
        assert_eq!(ActionLabel::normalize("wield"), "wield");
    }

    #[test]
    fn normalize_removes_every_marker_occurrence() {
        assert_eq!(ActionLabel::normalize("* * Eat"), "eat");
    }

    #[test]
    fn normalize_keeps_star_without_space() {
        assert_eq!(ActionLabel::normalize("*Eat"), "*eat");
    }

    #[test]
    fn eligible_actions_match_allow_list() {
        for raw in [
            "Withdraw-1",
            "Withdraw-X",
            "Deposit-All",
            "Wield",
            "Wear",
            "Equip",
            "Hold",
            "Eat",
            "Drink",
            "Fill",
            "Empty",
            "Placeholder",
            "* Withdraw-5",
        ] {
            assert!(is_eligible(raw), "{} should be eligible", raw);
        }
    }

    #[test]
    fn ineligible_actions_rejected() {
        for raw in ["Examine", "Cancel", "Release", "Withdraw", "Deposit", "Use"] {
            assert!(!is_eligible(raw), "{} should not be eligible", raw);
        }
    }

    #[test]
    fn prefix_match_is_not_substring_match() {
        assert!(!is_eligible("Re-wield"));
        assert!(is_eligible("wielding"));
    }

    #[test]
    fn stored_value_kept_verbatim() {
        let label = ActionLabel::from_stored("deposit-1");
        assert_eq!(label.as_str(), "deposit-1");
        assert_eq!(label, ActionLabel::normalize("Deposit-1"));
    }
}
