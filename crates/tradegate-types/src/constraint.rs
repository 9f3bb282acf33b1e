//! Constraint sets: declarative attribute requirements over an item.
//!
//! Each of the three domains has a key-presence list and a key/value list.
//! Any subset of the six may be empty; an empty list requires nothing.
//!
//! The serde field names follow the fixture vocabulary used by verification
//! tooling (`stringKeys`, `dblValues`, ...), so an expected-item fixture
//! decodes directly into a [`ConstraintSet`].

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AttributeDomain, FormatError, Result};

/// Requirements on one attribute domain, borrowed from a [`ConstraintSet`].
#[derive(Debug, Clone, Copy)]
pub struct DomainRequirement<'a, V> {
    pub domain: AttributeDomain,
    pub keys: &'a [String],
    pub pairs: &'a BTreeMap<String, V>,
}

impl<V> DomainRequirement<'_, V> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.pairs.is_empty()
    }

    /// Non-empty keys, no duplicate in the key list.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for key in self.keys {
            if key.is_empty() {
                return Err(FormatError::Constraint(format!(
                    "empty required {} key",
                    self.domain
                )));
            }
            if !seen.insert(key.as_str()) {
                return Err(FormatError::Constraint(format!(
                    "duplicate required {} key {key:?}",
                    self.domain
                )));
            }
        }
        if self.pairs.contains_key("") {
            return Err(FormatError::Constraint(format!(
                "empty required {} pair key",
                self.domain
            )));
        }
        Ok(())
    }
}

/// Attribute requirements an item must meet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    #[serde(rename = "stringKeys")]
    pub required_text_keys: Vec<String>,
    #[serde(rename = "stringValues")]
    pub required_text_pairs: BTreeMap<String, String>,
    #[serde(rename = "dblKeys")]
    pub required_decimal_keys: Vec<String>,
    /// Same 28-significant-digit precision as [`crate::Item::decimals`].
    #[serde(rename = "dblValues")]
    pub required_decimal_pairs: BTreeMap<String, Decimal>,
    #[serde(rename = "longKeys")]
    pub required_integer_keys: Vec<String>,
    #[serde(rename = "longValues")]
    pub required_integer_pairs: BTreeMap<String, i64>,
}

/// A constraint set used as an expected-item fixture.
pub type ItemExpectation = ConstraintSet;

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn require_text_key(mut self, key: impl Into<String>) -> Self {
        self.required_text_keys.push(key.into());
        self
    }

    #[must_use]
    pub fn require_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.required_text_pairs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn require_decimal_key(mut self, key: impl Into<String>) -> Self {
        self.required_decimal_keys.push(key.into());
        self
    }

    #[must_use]
    pub fn require_decimal(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.required_decimal_pairs.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn require_integer_key(mut self, key: impl Into<String>) -> Self {
        self.required_integer_keys.push(key.into());
        self
    }

    #[must_use]
    pub fn require_integer(mut self, key: impl Into<String>, value: i64) -> Self {
        self.required_integer_pairs.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn texts(&self) -> DomainRequirement<'_, String> {
        DomainRequirement {
            domain: AttributeDomain::Text,
            keys: &self.required_text_keys,
            pairs: &self.required_text_pairs,
        }
    }

    #[must_use]
    pub fn decimals(&self) -> DomainRequirement<'_, Decimal> {
        DomainRequirement {
            domain: AttributeDomain::Decimal,
            keys: &self.required_decimal_keys,
            pairs: &self.required_decimal_pairs,
        }
    }

    #[must_use]
    pub fn integers(&self) -> DomainRequirement<'_, i64> {
        DomainRequirement {
            domain: AttributeDomain::Integer,
            keys: &self.required_integer_keys,
            pairs: &self.required_integer_pairs,
        }
    }

    /// No requirement in any domain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts().is_empty() && self.decimals().is_empty() && self.integers().is_empty()
    }

    /// Structural well-formedness of all three domains.
    pub fn validate(&self) -> Result<()> {
        self.texts().validate()?;
        self.decimals().validate()?;
        self.integers().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_valid() {
        let cs = ConstraintSet::new();
        assert!(cs.is_empty());
        assert!(cs.validate().is_ok());
    }

    #[test]
    fn builder_fills_the_right_domain() {
        let cs = ConstraintSet::new()
            .require_text_key("Name")
            .require_integer("level", 2);
        assert!(!cs.is_empty());
        assert_eq!(cs.texts().keys, ["Name".to_string()]);
        assert!(cs.decimals().is_empty());
        assert_eq!(cs.integers().pairs.get("level"), Some(&2));
    }

    #[test]
    fn duplicate_key_rejected() {
        let cs = ConstraintSet::new()
            .require_decimal_key("attack")
            .require_decimal_key("attack");
        let err = cs.validate().unwrap_err();
        assert!(matches!(err, FormatError::Constraint(_)));
        assert!(err.to_string().contains("DECIMAL"));
    }

    #[test]
    fn empty_keys_rejected() {
        assert!(ConstraintSet::new().require_text_key("").validate().is_err());
        assert!(ConstraintSet::new().require_integer("", 1).validate().is_err());
    }

    #[test]
    fn decodes_fixture_vocabulary() {
        let json = r#"{
            "stringKeys": ["Name"],
            "stringValues": {"Name": "Sword"},
            "dblValues": {"attack": "1.50"},
            "longKeys": ["level"]
        }"#;
        let cs: ConstraintSet = serde_json::from_str(json).unwrap();
        assert_eq!(cs.required_text_keys, vec!["Name".to_string()]);
        assert_eq!(cs.required_decimal_pairs.get("attack"), Some(&Decimal::new(15, 1)));
        assert!(cs.required_decimal_keys.is_empty());
        assert_eq!(cs.required_integer_keys, vec!["level".to_string()]);
        assert!(cs.required_integer_pairs.is_empty());
    }
}
