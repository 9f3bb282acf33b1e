//! Error types for tradegate.
//!
//! All errors use the `TG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Creator / address errors
//! - 2xx: Coin and denomination errors
//! - 3xx: Item and constraint errors
//! - 9xx: General / configuration errors
//!
//! [`ValidationError`] is the rejection taxonomy returned by the trade order
//! validator. [`FormatError`] is what the lower-level format checks
//! (addresses, coins, identifiers, constraint sets) report; the validator
//! folds those into the `reason` of the matching rejection.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a trade order a payment-denomination conflict was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DenomScope {
    /// Two payment denominations inside a single coin input.
    Inputs,
    /// A payment denomination that differs from one already chosen, found
    /// either in a later coin input or in the coin outputs.
    Outputs,
}

impl fmt::Display for DenomScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inputs => write!(f, "CoinInputs"),
            Self::Outputs => write!(f, "CoinOutputs"),
        }
    }
}

/// Rejection reasons for a trade order. Exactly one is reported per
/// validation run: the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // =================================================================
    // Creator (1xx)
    // =================================================================
    /// The creator address did not parse.
    #[error("TG_ERR_100: Invalid creator address: {reason}")]
    InvalidCreator { reason: String },

    // =================================================================
    // Coins / denominations (2xx)
    // =================================================================
    /// A coin input's amount is malformed.
    #[error("TG_ERR_200: Invalid coin input at index {index}: {reason}")]
    InvalidCoinInput { index: usize, reason: String },

    /// The coin outputs are malformed.
    #[error("TG_ERR_201: Invalid coin outputs: {reason}")]
    InvalidCoinOutputs { reason: String },

    /// More than one payment denomination flows through the order.
    #[error("TG_ERR_202: Multiple payment denoms in {scope}: {first} and {second}")]
    MultiplePaymentDenoms {
        scope: DenomScope,
        first: String,
        second: String,
    },

    /// A denomination matches both the module-native and the bridged naming
    /// scheme, so it cannot be classified.
    #[error("TG_ERR_203: Ambiguous denomination: {denom}")]
    AmbiguousDenom { denom: String },

    // =================================================================
    // Items (3xx)
    // =================================================================
    /// An item output reference is malformed.
    #[error("TG_ERR_300: Invalid item output at index {index}: {reason}")]
    InvalidItemOutput { index: usize, reason: String },

    /// An item input failed validation.
    #[error("TG_ERR_301: Invalid item input at index {index}: {reason}")]
    InvalidItemInput { index: usize, reason: String },
}

impl ValidationError {
    /// Short machine-friendly name of the rule that rejected the order.
    #[must_use]
    pub fn rule(&self) -> &'static str {
        match self {
            Self::InvalidCreator { .. } => "creator",
            Self::InvalidCoinInput { .. } => "coin_input",
            Self::InvalidCoinOutputs { .. } => "coin_outputs",
            Self::MultiplePaymentDenoms { .. } => "payment_denom",
            Self::AmbiguousDenom { .. } => "denom_class",
            Self::InvalidItemOutput { .. } => "item_output",
            Self::InvalidItemInput { .. } => "item_input",
        }
    }
}

/// Failures reported by the format checks the validator delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Bech32 decoding failed or the payload is unusable.
    #[error("TG_ERR_101: Malformed address: {0}")]
    Address(String),

    /// The address decoded but carries a foreign human-readable prefix.
    #[error("TG_ERR_102: Address prefix mismatch: expected {expected}, got {actual}")]
    AddressPrefix { expected: String, actual: String },

    /// A coin string did not parse.
    #[error("TG_ERR_210: Unparseable coin: {0}")]
    CoinParse(String),

    /// A denomination does not follow the denom syntax.
    #[error("TG_ERR_211: Invalid denom: {0}")]
    Denom(String),

    /// A coin amount is zero, negative or fractional.
    #[error("TG_ERR_212: Invalid amount for {denom}: {amount}")]
    Amount { denom: String, amount: String },

    /// Coins are not strictly sorted by denom (covers duplicates).
    #[error("TG_ERR_213: Coins not sorted or duplicated at denom {0}")]
    Unsorted(String),

    /// A cookbook / generic identifier is malformed.
    #[error("TG_ERR_310: Invalid id: {0:?}")]
    Id(String),

    /// An item identifier is malformed.
    #[error("TG_ERR_311: Invalid item id: {0:?}")]
    ItemId(String),

    /// A constraint set is malformed (empty key, duplicate key).
    #[error("TG_ERR_312: Invalid constraint: {0}")]
    Constraint(String),

    /// Configuration could not be loaded.
    #[error("TG_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias for format checks.
pub type Result<T> = std::result::Result<T, FormatError>;

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
