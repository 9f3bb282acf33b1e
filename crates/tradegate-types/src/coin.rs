//! Multi-denomination coin amounts.
//!
//! A [`Coins`] value is well-formed when every denom follows the denom
//! syntax, every amount is a positive integer, and the entries are strictly
//! sorted by denom (which also rules out duplicates).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FormatError, Result, constants};

static DENOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(constants::DENOM_PATTERN).expect("static denom pattern"));

/// Check the syntax of a single denomination.
pub fn validate_denom(denom: &str) -> Result<()> {
    if DENOM_RE.is_match(denom) {
        Ok(())
    } else {
        Err(FormatError::Denom(denom.to_string()))
    }
}

/// A single denomination and amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Decimal,
}

impl Coin {
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Denom syntax plus a positive, integral amount.
    pub fn validate(&self) -> Result<()> {
        validate_denom(&self.denom)?;
        if self.amount <= Decimal::ZERO || !self.amount.fract().is_zero() {
            return Err(FormatError::Amount {
                denom: self.denom.clone(),
                amount: self.amount.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = FormatError;

    /// Parse `"<amount><denom>"`, e.g. `"100uatom"` or `"5cookbook/gold"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| FormatError::CoinParse(s.to_string()))?;
        let (amount, denom) = s.split_at(split);
        if amount.is_empty() {
            return Err(FormatError::CoinParse(s.to_string()));
        }
        let amount =
            Decimal::from_str(amount).map_err(|e| FormatError::CoinParse(format!("{s}: {e}")))?;
        validate_denom(denom)?;
        Ok(Self::new(amount, denom))
    }
}

/// An ordered multi-denomination amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    #[must_use]
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    /// Build from unsorted coins, sorting by denom.
    #[must_use]
    pub fn sorted(mut coins: Vec<Coin>) -> Self {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        Self(coins)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn denoms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.denom.as_str())
    }

    /// Well-formedness: each coin valid, denoms strictly ascending.
    pub fn validate(&self) -> Result<()> {
        let mut prev: Option<&str> = None;
        for coin in &self.0 {
            coin.validate()?;
            if let Some(p) = prev {
                if p >= coin.denom.as_str() {
                    return Err(FormatError::Unsorted(coin.denom.clone()));
                }
            }
            prev = Some(&coin.denom);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = FormatError;

    /// Parse a comma-separated list. Order is preserved, not normalised, so
    /// that [`Coins::validate`] can still reject unsorted input.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(Coin::from_str).collect::<Result<Vec<_>>>().map(Self)
    }
}
