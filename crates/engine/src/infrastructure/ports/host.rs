//! Host UI ports.

use leftclick_domain::{ContainerKind, ItemId, MenuAffordance};

/// Read access to the host's item containers.
#[cfg_attr(test, mockall::automock)]
pub trait ContainerContentsPort: Send + Sync {
    /// Item in `slot` of `container`.
    ///
    /// `None` when the container is not loaded, `slot` is out of range, or
    /// the slot is empty.
    fn item_at(&self, container: ContainerKind, slot: i32) -> Option<ItemId>;
}

/// The host's registry of custom menu options.
#[cfg_attr(test, mockall::automock)]
pub trait MenuManagerPort: Send + Sync {
    fn add_managed_custom_menu(&self, affordance: &MenuAffordance);

    /// No-op when `affordance` is not registered.
    fn remove_managed_custom_menu(&self, affordance: &MenuAffordance);
}
