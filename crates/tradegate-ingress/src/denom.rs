//! Denomination classification.
//!
//! Every denomination is sorted into one of three classes by its shape
//! alone, with no registry lookup:
//!
//! ```text
//!   <cookbook-id>/<coin-name>    ModuleNative   cookbookLOUD/gold
//!   <bridge-prefix>/<64 hex>     Bridged        ibc/27394FB0...5EB2
//!   anything else                Generic        uatom
//! ```
//!
//! Module-native coins are the tradable assets themselves; bridged and
//! generic coins are candidates for the single payment role of a trade.
//!
//! Lowercase hex after the bridge prefix can also read as a native coin name
//! (`ibc/deadbeef...`). Such a denomination is rejected as ambiguous rather
//! than assigned to either class.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use tradegate_types::{DenomRules, FormatError, ValidationError, constants, validate_id};

static NATIVE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::NATIVE_COIN_NAME_PATTERN).expect("static coin name pattern")
});

/// The class of a denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenomClass {
    /// Issued by a cookbook inside this module.
    ModuleNative,
    /// A cross-chain transferred representation.
    Bridged,
    /// Any other currency.
    Generic,
}

impl DenomClass {
    /// Only bridged and generic coins can be the price of a trade.
    #[must_use]
    pub fn is_payment_eligible(self) -> bool {
        matches!(self, Self::Bridged | Self::Generic)
    }
}

impl fmt::Display for DenomClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModuleNative => write!(f, "MODULE_NATIVE"),
            Self::Bridged => write!(f, "BRIDGED"),
            Self::Generic => write!(f, "GENERIC"),
        }
    }
}

/// Pattern-based denomination classifier.
#[derive(Debug, Clone)]
pub struct DenomClassifier {
    bridge_prefix: String,
    bridged: Regex,
}

impl DenomClassifier {
    /// Build a classifier for the given rules.
    ///
    /// # Errors
    /// Returns [`FormatError::Configuration`] if the bridge pattern cannot be
    /// compiled.
    pub fn new(rules: &DenomRules) -> tradegate_types::Result<Self> {
        let pattern = format!(
            "^{}/[0-9A-Fa-f]{{{}}}$",
            regex::escape(&rules.bridge_prefix),
            constants::BRIDGE_HASH_HEX_LEN
        );
        let bridged = Regex::new(&pattern)
            .map_err(|e| FormatError::Configuration(format!("bridge pattern: {e}")))?;
        Ok(Self {
            bridge_prefix: rules.bridge_prefix.clone(),
            bridged,
        })
    }

    /// `<cookbook-id>/<coin-name>`.
    #[must_use]
    pub fn is_module_native(&self, denom: &str) -> bool {
        denom
            .split_once(constants::DENOM_SEPARATOR)
            .is_some_and(|(cookbook, name)| {
                validate_id(cookbook).is_ok() && NATIVE_NAME_RE.is_match(name)
            })
    }

    /// `<bridge-prefix>/<64 hex digits>`.
    #[must_use]
    pub fn is_bridged(&self, denom: &str) -> bool {
        self.bridged.is_match(denom)
    }

    /// Classify `denom`.
    ///
    /// # Errors
    /// [`ValidationError::AmbiguousDenom`] if both the native and the
    /// bridged pattern match.
    pub fn classify(&self, denom: &str) -> Result<DenomClass, ValidationError> {
        let class = match (self.is_module_native(denom), self.is_bridged(denom)) {
            (true, true) => {
                return Err(ValidationError::AmbiguousDenom {
                    denom: denom.to_string(),
                });
            }
            (true, false) => DenomClass::ModuleNative,
            (false, true) => DenomClass::Bridged,
            (false, false) => DenomClass::Generic,
        };
        tracing::trace!(denom, class = %class, "Denom classified");
        Ok(class)
    }

    /// The bridged denomination of `base_denom` after travelling along
    /// `trace_path` (e.g. `transfer/channel-0`). An empty path means the coin
    /// never left its origin, so the base denomination is returned as is.
    #[must_use]
    pub fn bridged_denom(&self, trace_path: &str, base_denom: &str) -> String {
        if trace_path.is_empty() {
            return base_denom.to_string();
        }
        let mut hasher = Sha256::new();
        hasher.update(trace_path.as_bytes());
        hasher.update(b"/");
        hasher.update(base_denom.as_bytes());
        format!(
            "{}/{}",
            self.bridge_prefix,
            hex::encode_upper(hasher.finalize())
        )
    }
}

impl Default for DenomClassifier {
    fn default() -> Self {
        Self::new(&DenomRules::default()).expect("default bridge pattern compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM_HASH: &str = "27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

    fn classify(denom: &str) -> DenomClass {
        DenomClassifier::default().classify(denom).unwrap()
    }

    #[test]
    fn module_native() {
        assert_eq!(classify("cookbookLOUD/gold"), DenomClass::ModuleNative);
        assert_eq!(classify("cb_1-x/silver.coin"), DenomClass::ModuleNative);
    }

    #[test]
    fn module_native_denoms_are_valid_coin_denoms() {
        for denom in ["cookbookLOUD/gold", "cb_1-x/silver.coin"] {
            assert!(tradegate_types::validate_denom(denom).is_ok(), "{denom}");
        }
    }

    #[test]
    fn classification_is_looser_than_coin_syntax() {
        // a leading underscore is a valid cookbook id but not a valid denom
        assert_eq!(classify("_cb/gold"), DenomClass::ModuleNative);
        assert!(tradegate_types::validate_denom("_cb/gold").is_err());
    }

    #[test]
    fn bridged() {
        assert_eq!(classify(&format!("ibc/{ATOM_HASH}")), DenomClass::Bridged);
        // lowercase hex starting with a digit cannot be a coin name
        assert_eq!(
            classify(&format!("ibc/{}", ATOM_HASH.to_lowercase())),
            DenomClass::Bridged
        );
    }

    #[test]
    fn generic() {
        for denom in ["uatom", "upylon", "ibc/SHORT", "a/b/c", "cookbook/Gold", "1cb/gold"] {
            assert_eq!(classify(denom), DenomClass::Generic, "{denom}");
        }
    }

    #[test]
    fn ambiguous_is_an_error() {
        let denom = format!("ibc/{}", "ab".repeat(32));
        let err = DenomClassifier::default().classify(&denom).unwrap_err();
        assert_eq!(err, ValidationError::AmbiguousDenom { denom });
    }

    #[test]
    fn payment_eligibility() {
        assert!(!DenomClass::ModuleNative.is_payment_eligible());
        assert!(DenomClass::Bridged.is_payment_eligible());
        assert!(DenomClass::Generic.is_payment_eligible());
    }

    #[test]
    fn custom_bridge_prefix() {
        let rules = DenomRules {
            bridge_prefix: "bridge".into(),
        };
        let c = DenomClassifier::new(&rules).unwrap();
        assert!(c.is_bridged(&format!("bridge/{ATOM_HASH}")));
        assert!(!c.is_bridged(&format!("ibc/{ATOM_HASH}")));
    }

    #[test]
    fn default_matches_default_rules() {
        let a = DenomClassifier::default();
        let b = DenomClassifier::new(&DenomRules::default()).unwrap();
        let denom = format!("ibc/{ATOM_HASH}");
        assert_eq!(a.classify(&denom), b.classify(&denom));
    }

    #[test]
    fn bridged_denom_derivation() {
        let c = DenomClassifier::default();
        let d = c.bridged_denom("transfer/channel-0", "uatom");
        assert!(d.starts_with("ibc/"));
        assert_eq!(d.len(), 4 + 64);
        assert_eq!(d, d.to_uppercase().replacen("IBC", "ibc", 1));
        assert_eq!(c.classify(&d).unwrap(), DenomClass::Bridged);
        assert_eq!(d, c.bridged_denom("transfer/channel-0", "uatom"));
        assert_ne!(d, c.bridged_denom("transfer/channel-1", "uatom"));
        assert_eq!(c.bridged_denom("", "uatom"), "uatom");
    }
}
