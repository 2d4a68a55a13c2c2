//! Item variation table.
//!
//! Groups item ids that are the same logical item (charges, dyes, doses).
//! The first id of each group is the canonical id for the whole group.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use leftclick_domain::ItemId;

use crate::infrastructure::ports::{ItemVariationPort, VariationError};

#[derive(Debug, Default, Clone)]
pub struct VariationTable {
    canonical: HashMap<ItemId, ItemId>,
}

impl VariationTable {
    /// Table with no groups; every id maps to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from groups of ids, each led by its canonical id.
    ///
    /// # Errors
    ///
    /// Returns `VariationError::Invalid` if a group is empty or an id belongs
    /// to more than one group.
    pub fn from_groups<I, G>(groups: I) -> Result<Self, VariationError>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = ItemId>,
    {
        let mut canonical = HashMap::new();

        for group in groups {
            let mut ids = group.into_iter();
            let Some(base) = ids.next() else {
                return Err(VariationError::invalid("empty variation group"));
            };

            for id in std::iter::once(base).chain(ids) {
                if let Some(existing) = canonical.insert(id, base) {
                    if existing != base {
                        return Err(VariationError::invalid(format!(
                            "item {} belongs to groups {} and {}",
                            id, existing, base
                        )));
                    }
                }
            }
        }

        Ok(Self { canonical })
    }

    /// Parse `{ "<group name>": [base, variant, ...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, VariationError> {
        let groups: BTreeMap<String, Vec<ItemId>> =
            serde_json::from_str(json).map_err(VariationError::invalid)?;
        Self::from_groups(groups.into_values())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, VariationError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| VariationError::io(path, e))?;
        let table = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            items = table.len(),
            "Loaded item variation table"
        );
        Ok(table)
    }

    /// Number of ids covered by a group.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl ItemVariationPort for VariationTable {
    fn map(&self, item: ItemId) -> ItemId {
        self.canonical.get(&item).copied().unwrap_or(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[i32]) -> Vec<ItemId> {
        values.iter().copied().map(ItemId::new).collect()
    }

    #[test]
    fn variants_map_to_first_id() {
        let table = VariationTable::from_groups([ids(&[1712, 1710, 1708, 1706])]).unwrap();

        assert_eq!(table.map(ItemId::new(1706)), ItemId::new(1712));
        assert_eq!(table.map(ItemId::new(1712)), ItemId::new(1712));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn unmapped_ids_are_unchanged() {
        let table = VariationTable::empty();
        assert_eq!(table.map(ItemId::new(995)), ItemId::new(995));
    }

    #[test]
    fn parses_json_groups() {
        let json = r#"{
            "amulet of glory": [1712, 1710, 1708],
            "prayer potion": [2434, 139, 141, 143]
        }"#;
        let table = VariationTable::from_json_str(json).unwrap();

        assert_eq!(table.map(ItemId::new(143)), ItemId::new(2434));
        assert_eq!(table.map(ItemId::new(1708)), ItemId::new(1712));
    }

    #[test]
    fn rejects_overlapping_groups() {
        let result = VariationTable::from_groups([ids(&[1, 2]), ids(&[3, 2])]);
        assert!(matches!(result, Err(VariationError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_group() {
        let result = VariationTable::from_json_str(r#"{ "nothing": [] }"#);
        assert!(matches!(result, Err(VariationError::Invalid(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = VariationTable::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(VariationError::Io { .. })));
    }
}
