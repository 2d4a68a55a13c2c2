//! In-process stand-ins for the host UI.
//!
//! Used by the replay binary and by scenario tests. Containers are plain slot
//! vectors; the menu manager just remembers what is registered.

use std::collections::HashMap;
use std::sync::Mutex;

use leftclick_domain::{AffordanceKind, ContainerKind, ItemId, MenuAffordance};

use crate::infrastructure::lock;
use crate::infrastructure::ports::{ContainerContentsPort, MenuManagerPort};

/// Containers whose slots are set by the caller.
///
/// A container that was never set counts as not loaded.
#[derive(Default)]
pub struct ScriptedContainers {
    containers: Mutex<HashMap<ContainerKind, Vec<Option<ItemId>>>>,
}

impl ScriptedContainers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(self, kind: ContainerKind, slots: Vec<Option<ItemId>>) -> Self {
        self.set_container(kind, slots);
        self
    }

    pub fn set_container(&self, kind: ContainerKind, slots: Vec<Option<ItemId>>) {
        lock(&self.containers).insert(kind, slots);
    }

    /// Mark a container as not loaded (e.g. the bank was closed).
    pub fn close_container(&self, kind: ContainerKind) {
        lock(&self.containers).remove(&kind);
    }
}

impl ContainerContentsPort for ScriptedContainers {
    fn item_at(&self, container: ContainerKind, slot: i32) -> Option<ItemId> {
        let index = usize::try_from(slot).ok()?;
        lock(&self.containers)
            .get(&container)
            .and_then(|slots| slots.get(index).copied().flatten())
    }
}

/// Menu manager that records registered affordances in insertion order.
#[derive(Default)]
pub struct RecordingMenuManager {
    registered: Mutex<Vec<MenuAffordance>>,
}

impl RecordingMenuManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered(&self) -> Vec<MenuAffordance> {
        lock(&self.registered).clone()
    }

    pub fn is_registered(&self, kind: AffordanceKind) -> bool {
        lock(&self.registered).iter().any(|a| a.kind == kind)
    }
}

impl MenuManagerPort for RecordingMenuManager {
    fn add_managed_custom_menu(&self, affordance: &MenuAffordance) {
        lock(&self.registered).push(affordance.clone());
    }

    fn remove_managed_custom_menu(&self, affordance: &MenuAffordance) {
        lock(&self.registered).retain(|a| a != affordance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leftclick_domain::WidgetId;

    #[test]
    fn item_at_handles_bounds_and_empty_slots() {
        let containers = ScriptedContainers::new().with_container(
            ContainerKind::Bank,
            vec![Some(ItemId::new(995)), None, Some(ItemId::new(1234))],
        );

        assert_eq!(
            containers.item_at(ContainerKind::Bank, 0),
            Some(ItemId::new(995))
        );
        assert_eq!(containers.item_at(ContainerKind::Bank, 1), None);
        assert_eq!(
            containers.item_at(ContainerKind::Bank, 2),
            Some(ItemId::new(1234))
        );
        assert_eq!(containers.item_at(ContainerKind::Bank, 3), None);
        assert_eq!(containers.item_at(ContainerKind::Bank, -1), None);
    }

    #[test]
    fn unloaded_container_has_no_items() {
        let containers = ScriptedContainers::new()
            .with_container(ContainerKind::Inventory, vec![Some(ItemId::new(1))]);

        assert_eq!(containers.item_at(ContainerKind::Bank, 0), None);

        containers.close_container(ContainerKind::Inventory);
        assert_eq!(containers.item_at(ContainerKind::Inventory, 0), None);
    }

    #[test]
    fn menu_manager_add_and_remove() {
        let manager = RecordingMenuManager::new();
        let configure = MenuAffordance::new(AffordanceKind::Configure, WidgetId::new(7));
        let save = MenuAffordance::new(AffordanceKind::Save, WidgetId::new(7));

        manager.remove_managed_custom_menu(&save);
        manager.add_managed_custom_menu(&configure);

        assert!(manager.is_registered(AffordanceKind::Configure));
        assert!(!manager.is_registered(AffordanceKind::Save));

        manager.remove_managed_custom_menu(&configure);
        assert!(manager.registered().is_empty());
    }
}
