//! Storage and lookup ports.

use leftclick_domain::ItemId;

/// Namespaced string key-value configuration.
///
/// Writes are fire-and-forget: persistence failures are the adapter's to
/// log, never the caller's to handle.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStorePort: Send + Sync {
    fn get_configuration(&self, group: &str, key: &str) -> Option<String>;
    fn set_configuration(&self, group: &str, key: &str, value: &str);
    fn unset_configuration(&self, group: &str, key: &str);
}

/// Maps an item to the representative id of its variation group.
#[cfg_attr(test, mockall::automock)]
pub trait ItemVariationPort: Send + Sync {
    /// Ids outside any group map to themselves.
    fn map(&self, item: ItemId) -> ItemId;
}
