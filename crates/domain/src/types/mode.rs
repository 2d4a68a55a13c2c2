//! Customization mode.

use serde::{Deserialize, Serialize};

/// Whether the user is currently choosing left-click actions.
///
/// In `Configuring` mode, clicking an eligible action records it as the new
/// preference for that item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationMode {
    #[default]
    Normal,
    Configuring,
}

impl CustomizationMode {
    pub fn is_configuring(&self) -> bool {
        matches!(self, CustomizationMode::Configuring)
    }

    pub fn from_configuring(configuring: bool) -> Self {
        if configuring {
            CustomizationMode::Configuring
        } else {
            CustomizationMode::Normal
        }
    }
}

impl std::fmt::Display for CustomizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomizationMode::Normal => write!(f, "normal"),
            CustomizationMode::Configuring => write!(f, "configuring"),
        }
    }
}
