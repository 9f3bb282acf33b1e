//! Identifiers used throughout tradegate: account addresses, cookbook ids,
//! item ids and item references.
//!
//! Addresses are bech32 strings. Cookbook and item ids are plain strings
//! checked against fixed patterns; they are kept as `String` on the data
//! types so that malformed input can still be decoded and then rejected
//! with a precise reason.

use std::fmt;
use std::sync::LazyLock;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{AddressRules, FormatError, Result, constants};

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(constants::ID_PATTERN).expect("static id pattern"));

static ITEM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(constants::ITEM_ID_PATTERN).expect("static item id pattern"));

// ---------------------------------------------------------------------------
// AccAddress
// ---------------------------------------------------------------------------

/// A parsed account address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress {
    text: String,
    payload: Vec<u8>,
}

impl AccAddress {
    /// Parse a bech32 address and check it against `rules`.
    ///
    /// # Errors
    /// [`FormatError::Address`] for empty input, bad charset, a checksum that
    /// is not plain bech32 (bech32m is refused) or a payload outside
    /// `1..=rules.max_len`; [`FormatError::AddressPrefix`] for a foreign
    /// human-readable prefix. The prefix is compared without regard to case.
    pub fn parse(text: &str, rules: &AddressRules) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(FormatError::Address("empty address string".to_string()));
        }
        let checked = CheckedHrpstring::new::<Bech32>(text)
            .map_err(|e| FormatError::Address(e.to_string()))?;
        let hrp = checked.hrp();
        if hrp.to_lowercase() != rules.hrp.to_lowercase() {
            return Err(FormatError::AddressPrefix {
                expected: rules.hrp.clone(),
                actual: hrp.to_string(),
            });
        }
        let payload: Vec<u8> = checked.byte_iter().collect();
        if payload.is_empty() || payload.len() > rules.max_len {
            return Err(FormatError::Address(format!(
                "payload length {} outside 1..={}",
                payload.len(),
                rules.max_len
            )));
        }
        Ok(Self {
            text: text.to_string(),
            payload,
        })
    }

    /// Encode raw bytes as an address with the given prefix.
    pub fn encode(hrp: &str, payload: &[u8]) -> Result<Self> {
        let hrp = Hrp::parse(hrp).map_err(|e| FormatError::Address(e.to_string()))?;
        let text = bech32::encode::<Bech32>(hrp, payload)
            .map_err(|e| FormatError::Address(e.to_string()))?;
        Ok(Self {
            text,
            payload: payload.to_vec(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ---------------------------------------------------------------------------
// Cookbook / item ids
// ---------------------------------------------------------------------------

/// Check a cookbook id (or any other generic identifier).
pub fn validate_id(id: &str) -> Result<()> {
    if ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(FormatError::Id(id.to_string()))
    }
}

/// Check an item id.
pub fn validate_item_id(id: &str) -> Result<()> {
    if ITEM_ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(FormatError::ItemId(id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ItemRef
// ---------------------------------------------------------------------------

/// Reference to an item inside a cookbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ItemRef {
    #[serde(rename = "cookbookId")]
    pub cookbook_id: String,
    #[serde(rename = "itemId")]
    pub item_id: String,
}

impl ItemRef {
    #[must_use]
    pub fn new(cookbook_id: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            cookbook_id: cookbook_id.into(),
            item_id: item_id.into(),
        }
    }

    /// Both halves well-formed. The item id is checked first.
    pub fn validate(&self) -> Result<()> {
        validate_item_id(&self.item_id)?;
        validate_id(&self.cookbook_id)
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cookbook_id, self.item_id)
    }
}
