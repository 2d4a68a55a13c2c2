//! Stored left-click preferences.
//!
//! One string per `(container widget, canonical item)` under a single
//! configuration group, keyed `item_<widgetId>_<itemId>`.

use std::sync::Arc;

use leftclick_domain::common::none_if_empty;
use leftclick_domain::{ActionLabel, CanonicalItemId, WidgetId};

use crate::infrastructure::ports::ConfigStorePort;

const ITEM_KEY_PREFIX: &str = "item_";

/// Preference store entity operations.
pub struct Preferences {
    store: Arc<dyn ConfigStorePort>,
    group: String,
}

impl Preferences {
    pub fn new(store: Arc<dyn ConfigStorePort>, group: impl Into<String>) -> Self {
        Self {
            store,
            group: group.into(),
        }
    }

    pub fn key(widget: WidgetId, item: CanonicalItemId) -> String {
        format!("{}{}_{}", ITEM_KEY_PREFIX, widget, item)
    }

    /// Stored label, treating an empty value as absent.
    pub fn get(&self, widget: WidgetId, item: CanonicalItemId) -> Option<ActionLabel> {
        let value = self
            .store
            .get_configuration(&self.group, &Self::key(widget, item))?;
        none_if_empty(&value).map(ActionLabel::from_stored)
    }

    pub fn set(&self, widget: WidgetId, item: CanonicalItemId, label: &ActionLabel) {
        let key = Self::key(widget, item);
        tracing::debug!(key = %key, label = %label, "Storing left-click preference");
        self.store
            .set_configuration(&self.group, &key, label.as_str());
    }

    pub fn unset(&self, widget: WidgetId, item: CanonicalItemId) {
        let key = Self::key(widget, item);
        tracing::debug!(key = %key, "Clearing left-click preference");
        self.store.unset_configuration(&self.group, &key);
    }
}
