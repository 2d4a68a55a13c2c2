//! Item identity normalization.

use std::sync::Arc;

use leftclick_domain::{CanonicalItemId, ItemId};

use crate::infrastructure::ports::ItemVariationPort;

/// Collapses item variants so they share one preference.
pub struct IdentityNormalizer {
    variations: Arc<dyn ItemVariationPort>,
}

impl IdentityNormalizer {
    pub fn new(variations: Arc<dyn ItemVariationPort>) -> Self {
        Self { variations }
    }

    pub fn normalize(&self, item: ItemId) -> CanonicalItemId {
        CanonicalItemId::from_mapped(self.variations.map(item))
    }
}
