//! Items and their typed attribute tables.
//!
//! An item carries three independent key/value tables: text, decimal and
//! integer. The same key may appear in more than one table; the tables never
//! interact. All three are the same generic [`AttributeTable`], which is what
//! lets the matcher treat them uniformly.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ItemRef;

/// The three attribute domains of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AttributeDomain {
    Text,
    Decimal,
    Integer,
}

impl fmt::Display for AttributeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "TEXT"),
            Self::Decimal => write!(f, "DECIMAL"),
            Self::Integer => write!(f, "INTEGER"),
        }
    }
}

/// A key/value table with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable<V> {
    entries: BTreeMap<String, V>,
}

impl<V> AttributeTable<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, V> {
        &self.entries
    }
}

impl<V> Default for AttributeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A tradable item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "cookbookId")]
    pub cookbook_id: String,
    #[serde(default, rename = "strings")]
    pub texts: AttributeTable<String>,
    /// Held as 96-bit decimals: at most 28 significant digits, excess
    /// fractional digits are rounded when parsed.
    #[serde(default, rename = "doubles")]
    pub decimals: AttributeTable<Decimal>,
    #[serde(default, rename = "longs")]
    pub integers: AttributeTable<i64>,
}

impl Item {
    #[must_use]
    pub fn new(cookbook_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cookbook_id: cookbook_id.into(),
            ..Self::default()
        }
    }

    /// Builder-style text attribute.
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.texts.insert(key, value.into());
        self
    }

    /// Builder-style decimal attribute.
    #[must_use]
    pub fn with_decimal(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.decimals.insert(key, value);
        self
    }

    /// Builder-style integer attribute.
    #[must_use]
    pub fn with_integer(mut self, key: impl Into<String>, value: i64) -> Self {
        self.integers.insert(key, value);
        self
    }

    #[must_use]
    pub fn item_ref(&self) -> ItemRef {
        ItemRef::new(self.cookbook_id.clone(), self.id.clone())
    }

    /// Does this item live at `r`?
    #[must_use]
    pub fn is_at(&self, r: &ItemRef) -> bool {
        self.cookbook_id == r.cookbook_id && self.id == r.item_id
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Item {
    /// A sword with one attribute in each domain.
    pub fn dummy_sword() -> Self {
        Self::new("cookbookLOUD", "2PqmBx7D")
            .with_text("Name", "Sword")
            .with_decimal("attack", Decimal::new(150, 2))
            .with_integer("level", 3)
    }
}
