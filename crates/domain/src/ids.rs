use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self).map_err(|e| {
                    DomainError::invalid_id(format!("{} '{}': {}", stringify!($name), s, e))
                })
            }
        }
    };
}

// Raw item id as reported by a container slot
define_id!(ItemId);

// Host widget (component) id
define_id!(WidgetId);

/// Item id after variation collapsing.
///
/// Charged, coloured and otherwise cosmetic variants of one logical item share
/// a single canonical id, so they share one stored preference. Never persisted
/// on its own; always recomputed from the raw [`ItemId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalItemId(ItemId);

impl CanonicalItemId {
    /// Wrap an id that has already been through the variation mapping.
    pub const fn from_mapped(item: ItemId) -> Self {
        Self(item)
    }

    pub const fn item(self) -> ItemId {
        self.0
    }

    pub const fn get(self) -> i32 {
        self.0.get()
    }
}

impl fmt::Display for CanonicalItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!(" 786445 ".parse::<WidgetId>(), Ok(WidgetId::new(786445)));
        assert_eq!("-1".parse::<ItemId>(), Ok(ItemId::new(-1)));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "bank".parse::<WidgetId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.contains("WidgetId 'bank'")));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(1234)).unwrap();
        assert_eq!(json, "1234");

        let canonical = CanonicalItemId::from_mapped(ItemId::new(1234));
        assert_eq!(serde_json::to_string(&canonical).unwrap(), "1234");
        assert_eq!(canonical.to_string(), "1234");
    }
}
