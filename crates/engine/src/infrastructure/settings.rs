//! Engine settings loaded from the environment.
//!
//! Supported environment variables:
//! - `LEFTCLICK_CONFIG_GROUP`: configuration namespace for stored preferences
//! - `LEFTCLICK_BANK_WIDGET`: widget id of the bank item container
//! - `LEFTCLICK_INVENTORY_WIDGET`: widget id of the inventory shown beside the bank
//! - `LEFTCLICK_DEPOSIT_INVENTORY_WIDGET`: widget carrying the Configure/Save option
//! - `LEFTCLICK_STORE_PATH`: JSON preference file (in-memory store when unset)
//! - `LEFTCLICK_VARIATIONS_PATH`: item variation table (identity mapping when unset)
//!
//! Invalid values are logged and replaced by the defaults.

use std::path::PathBuf;

use leftclick_domain::{ContainerWidgets, DomainError, WidgetId};

pub const DEFAULT_CONFIG_GROUP: &str = "leftclickbanking";
pub const DEFAULT_BANK_WIDGET: WidgetId = WidgetId::new(786_445);
pub const DEFAULT_INVENTORY_WIDGET: WidgetId = WidgetId::new(983_043);
pub const DEFAULT_DEPOSIT_INVENTORY_WIDGET: WidgetId = WidgetId::new(786_474);

const ENV_CONFIG_GROUP: &str = "LEFTCLICK_CONFIG_GROUP";
const ENV_BANK_WIDGET: &str = "LEFTCLICK_BANK_WIDGET";
const ENV_INVENTORY_WIDGET: &str = "LEFTCLICK_INVENTORY_WIDGET";
const ENV_DEPOSIT_INVENTORY_WIDGET: &str = "LEFTCLICK_DEPOSIT_INVENTORY_WIDGET";
const ENV_STORE_PATH: &str = "LEFTCLICK_STORE_PATH";
const ENV_VARIATIONS_PATH: &str = "LEFTCLICK_VARIATIONS_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub config_group: String,
    pub bank_widget: WidgetId,
    pub inventory_widget: WidgetId,
    pub deposit_inventory_widget: WidgetId,
    pub store_path: Option<PathBuf>,
    pub variations_path: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            config_group: DEFAULT_CONFIG_GROUP.to_string(),
            bank_widget: DEFAULT_BANK_WIDGET,
            inventory_widget: DEFAULT_INVENTORY_WIDGET,
            deposit_inventory_widget: DEFAULT_DEPOSIT_INVENTORY_WIDGET,
            store_path: None,
            variations_path: None,
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(group) = lookup(ENV_CONFIG_GROUP) {
            let group = group.trim();
            if group.is_empty() {
                tracing::warn!("{} is empty, ignoring", ENV_CONFIG_GROUP);
            } else {
                settings.config_group = group.to_string();
            }
        }

        apply_widget(&lookup, ENV_BANK_WIDGET, &mut settings.bank_widget);
        apply_widget(&lookup, ENV_INVENTORY_WIDGET, &mut settings.inventory_widget);
        apply_widget(
            &lookup,
            ENV_DEPOSIT_INVENTORY_WIDGET,
            &mut settings.deposit_inventory_widget,
        );

        if settings.bank_widget == settings.inventory_widget {
            tracing::warn!(
                widget = %settings.bank_widget,
                "Bank and inventory widgets are identical, falling back to defaults"
            );
            settings.bank_widget = DEFAULT_BANK_WIDGET;
            settings.inventory_widget = DEFAULT_INVENTORY_WIDGET;
        }

        settings.store_path = lookup(ENV_STORE_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        settings.variations_path = lookup(ENV_VARIATIONS_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        settings
    }

    pub fn container_widgets(&self) -> Result<ContainerWidgets, DomainError> {
        ContainerWidgets::new(
            self.bank_widget,
            self.inventory_widget,
            self.deposit_inventory_widget,
        )
    }
}

fn apply_widget(lookup: &impl Fn(&str) -> Option<String>, key: &str, target: &mut WidgetId) {
    let Some(val) = lookup(key) else {
        return;
    };

    match val.parse::<WidgetId>() {
        Ok(widget) => {
            *target = widget;
            tracing::info!(widget = %widget, "Applied {} environment variable", key);
        }
        Err(e) => {
            tracing::warn!(val = %val, error = %e, "{} is not a valid widget id, ignoring", key);
        }
    }
}
