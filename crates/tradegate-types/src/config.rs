//! Configuration for the trade order validator.

use serde::{Deserialize, Serialize};

use crate::{FormatError, constants};

/// Rules for creator / party addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRules {
    /// Required bech32 human-readable prefix.
    pub hrp: String,
    /// Maximum decoded payload length in bytes.
    pub max_len: usize,
}

impl Default for AddressRules {
    fn default() -> Self {
        Self {
            hrp: constants::DEFAULT_ADDRESS_HRP.to_string(),
            max_len: constants::MAX_ADDRESS_LEN,
        }
    }
}

/// Rules for classifying denominations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomRules {
    /// Leading path segment of bridged denominations (`ibc` in `ibc/<hash>`).
    pub bridge_prefix: String,
}

impl Default for DenomRules {
    fn default() -> Self {
        Self {
            bridge_prefix: constants::DEFAULT_BRIDGE_PREFIX.to_string(),
        }
    }
}

/// Top-level validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub address: AddressRules,
    pub denoms: DenomRules,
}

impl ValidationConfig {
    /// Load a configuration from JSON. Missing fields fall back to defaults.
    ///
    /// # Errors
    /// Returns [`FormatError::Configuration`] if the JSON is malformed or
    /// the resulting rules are unusable.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Sanity-check the rule values.
    pub fn check(&self) -> crate::Result<()> {
        if self.address.hrp.is_empty() {
            return Err(FormatError::Configuration(
                "address.hrp must not be empty".to_string(),
            ));
        }
        if self.address.max_len == 0 {
            return Err(FormatError::Configuration(
                "address.max_len must be positive".to_string(),
            ));
        }
        let prefix = &self.denoms.bridge_prefix;
        if prefix.is_empty()
            || !prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(FormatError::Configuration(format!(
                "denoms.bridge_prefix {prefix:?} must be a single path segment"
            )));
        }
        Ok(())
    }
}
