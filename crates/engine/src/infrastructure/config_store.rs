//! Key-value configuration stores.
//!
//! Both stores keep `group -> key -> value` maps. The JSON store rewrites its
//! whole file after every mutation; the documents are small (one entry per
//! configured item) and writes only happen on user clicks.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::infrastructure::lock;
use crate::infrastructure::ports::{ConfigStorePort, StoreError};

type Groups = BTreeMap<String, BTreeMap<String, String>>;

fn remove_key(groups: &mut Groups, group: &str, key: &str) -> bool {
    let Some(entries) = groups.get_mut(group) else {
        return false;
    };
    let removed = entries.remove(key).is_some();
    if entries.is_empty() {
        groups.remove(group);
    }
    removed
}

/// Process-local store. Contents are lost on drop.
#[derive(Default)]
pub struct InMemoryConfigStore {
    groups: Mutex<Groups>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys stored under `group`.
    pub fn len(&self, group: &str) -> usize {
        lock(&self.groups).get(group).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.groups).is_empty()
    }

    /// All `(key, value)` pairs under `group`, sorted by key.
    pub fn entries(&self, group: &str) -> Vec<(String, String)> {
        lock(&self.groups)
            .get(group)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ConfigStorePort for InMemoryConfigStore {
    fn get_configuration(&self, group: &str, key: &str) -> Option<String> {
        lock(&self.groups)
            .get(group)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn set_configuration(&self, group: &str, key: &str, value: &str) {
        lock(&self.groups)
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    fn unset_configuration(&self, group: &str, key: &str) {
        remove_key(&mut lock(&self.groups), group, key);
    }
}

/// Store backed by a JSON document on disk.
///
/// The file holds `{ "<group>": { "<key>": "<value>" } }`. A missing file is
/// an empty store; it is created on the first write.
pub struct JsonFileConfigStore {
    path: PathBuf,
    groups: Mutex<Groups>,
}

impl JsonFileConfigStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let groups = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Groups::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(StoreError::serialization)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Groups::new(),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        tracing::debug!(
            path = %path.display(),
            groups = groups.len(),
            "Opened configuration store"
        );

        Ok(Self {
            path,
            groups: Mutex::new(groups),
        })
    }

    fn persist(&self, groups: &Groups) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(groups).map_err(StoreError::serialization)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    fn persist_or_warn(&self, groups: &Groups, group: &str, key: &str) {
        if let Err(e) = self.persist(groups) {
            tracing::warn!(
                error = %e,
                group,
                key,
                "Failed to persist configuration change"
            );
        }
    }
}

impl ConfigStorePort for JsonFileConfigStore {
    fn get_configuration(&self, group: &str, key: &str) -> Option<String> {
        lock(&self.groups)
            .get(group)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn set_configuration(&self, group: &str, key: &str, value: &str) {
        let mut groups = lock(&self.groups);
        let previous = groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());

        if previous.as_deref() != Some(value) {
            self.persist_or_warn(&groups, group, key);
        }
    }

    fn unset_configuration(&self, group: &str, key: &str) {
        let mut groups = lock(&self.groups);
        if remove_key(&mut groups, group, key) {
            self.persist_or_warn(&groups, group, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: &str = "leftclickbanking";

    #[test]
    fn in_memory_set_get_unset() {
        let store = InMemoryConfigStore::new();
        assert_eq!(store.get_configuration(GROUP, "item_1_2"), None);

        store.set_configuration(GROUP, "item_1_2", "wield");
        assert_eq!(
            store.get_configuration(GROUP, "item_1_2").as_deref(),
            Some("wield")
        );
        assert_eq!(store.len(GROUP), 1);

        store.unset_configuration(GROUP, "item_1_2");
        assert_eq!(store.get_configuration(GROUP, "item_1_2"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn in_memory_groups_are_isolated() {
        let store = InMemoryConfigStore::new();
        store.set_configuration(GROUP, "item_1_2", "wield");
        store.set_configuration("other", "item_1_2", "eat");

        assert_eq!(
            store.get_configuration(GROUP, "item_1_2").as_deref(),
            Some("wield")
        );
        assert_eq!(
            store.get_configuration("other", "item_1_2").as_deref(),
            Some("eat")
        );
    }

    #[test]
    fn in_memory_unset_missing_key_is_noop() {
        let store = InMemoryConfigStore::new();
        store.unset_configuration(GROUP, "item_1_2");
        assert!(store.is_empty());
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = JsonFileConfigStore::open(&path).unwrap();

        assert_eq!(store.get_configuration(GROUP, "item_1_2"), None);
        assert!(!path.exists());
    }

    #[test]
    fn json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let store = JsonFileConfigStore::open(&path).unwrap();
            store.set_configuration(GROUP, "item_786445_1234", "withdraw-1");
            store.set_configuration(GROUP, "item_983043_1234", "deposit-all");
            store.unset_configuration(GROUP, "item_983043_1234");
        }

        let reopened = JsonFileConfigStore::open(&path).unwrap();
        assert_eq!(
            reopened
                .get_configuration(GROUP, "item_786445_1234")
                .as_deref(),
            Some("withdraw-1")
        );
        assert_eq!(reopened.get_configuration(GROUP, "item_983043_1234"), None);
    }

    #[test]
    fn json_store_writes_nested_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = JsonFileConfigStore::open(&path).unwrap();

        store.set_configuration(GROUP, "item_1_2", "eat");

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc[GROUP]["item_1_2"], "eat");
    }

    #[test]
    fn json_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileConfigStore::open(&path);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
