//! Container kinds and the widget ids that identify them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::WidgetId;

/// Which item container a menu event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Bank storage
    Bank,
    /// Carried inventory, as shown beside the open bank
    Inventory,
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Bank => write!(f, "bank"),
            ContainerKind::Inventory => write!(f, "inventory"),
        }
    }
}

/// Host widget ids the engine recognises.
///
/// These are host constants; they are injected rather than hardcoded so the
/// engine can run against fakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerWidgets {
    bank: WidgetId,
    inventory: WidgetId,
    deposit_inventory: WidgetId,
}

impl ContainerWidgets {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the bank and inventory widgets are
    /// the same id, since a widget must resolve to exactly one container.
    pub fn new(
        bank: WidgetId,
        inventory: WidgetId,
        deposit_inventory: WidgetId,
    ) -> Result<Self, DomainError> {
        if bank == inventory {
            return Err(DomainError::validation(format!(
                "bank and inventory widgets must differ (both {})",
                bank
            )));
        }
        Ok(Self {
            bank,
            inventory,
            deposit_inventory,
        })
    }

    /// Map a widget id from a menu entry to a container, if it is one of ours.
    pub fn resolve(&self, widget: WidgetId) -> Option<ContainerKind> {
        if widget == self.bank {
            Some(ContainerKind::Bank)
        } else if widget == self.inventory {
            Some(ContainerKind::Inventory)
        } else {
            None
        }
    }

    pub fn widget_for(&self, kind: ContainerKind) -> WidgetId {
        match kind {
            ContainerKind::Bank => self.bank,
            ContainerKind::Inventory => self.inventory,
        }
    }

    /// Widget the Configure/Save affordance is attached to.
    pub fn deposit_inventory(&self) -> WidgetId {
        self.deposit_inventory
    }
}
