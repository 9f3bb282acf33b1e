//! Trade order model.
//!
//! A trade order offers coin and item inputs in exchange for coin and item
//! outputs. The types here only carry data; admission rules live in the
//! ingress crate.

use serde::{Deserialize, Serialize};

use crate::{AccAddress, AddressRules, Coins, ConstraintSet, ItemRef, Result};

/// One coin input alternative: a multi-denomination amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinInput {
    pub coins: Coins,
}

impl CoinInput {
    #[must_use]
    pub fn new(coins: Coins) -> Self {
        Self { coins }
    }
}

/// An item the order consumes: which item, and the attributes it must have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub item: ItemRef,
    #[serde(default)]
    pub constraints: ConstraintSet,
}

impl ItemInput {
    #[must_use]
    pub fn new(item: ItemRef, constraints: ConstraintSet) -> Self {
        Self { item, constraints }
    }

    /// Reference well-formed and constraint set structurally valid.
    pub fn validate(&self) -> Result<()> {
        self.item.validate()?;
        self.constraints.validate()
    }
}

/// A proposed trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOrder {
    pub creator: String,
    #[serde(default, rename = "coinInputs")]
    pub coin_inputs: Vec<CoinInput>,
    #[serde(default, rename = "itemInputs")]
    pub item_inputs: Vec<ItemInput>,
    #[serde(default, rename = "coinOutputs")]
    pub coin_outputs: Coins,
    #[serde(default, rename = "itemOutputs")]
    pub item_outputs: Vec<ItemRef>,
    #[serde(default, rename = "extraInfo")]
    pub extra_info: String,
}

impl TradeOrder {
    #[must_use]
    pub fn new(
        creator: impl Into<String>,
        coin_inputs: Vec<CoinInput>,
        item_inputs: Vec<ItemInput>,
        coin_outputs: Coins,
        item_outputs: Vec<ItemRef>,
        extra_info: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            coin_inputs,
            item_inputs,
            coin_outputs,
            item_outputs,
            extra_info: extra_info.into(),
        }
    }

    /// The accounts that must authorise this order.
    pub fn signers(&self, rules: &AddressRules) -> Result<Vec<AccAddress>> {
        Ok(vec![AccAddress::parse(&self.creator, rules)?])
    }

    /// Every denomination named by the coin inputs, then the coin outputs.
    pub fn denoms(&self) -> impl Iterator<Item = &str> {
        self.coin_inputs
            .iter()
            .flat_map(|ci| ci.coins.denoms())
            .chain(self.coin_outputs.denoms())
    }
}

/// Request to withdraw a previously created trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTrade {
    pub creator: String,
    pub id: u64,
}

impl CancelTrade {
    #[must_use]
    pub fn new(creator: impl Into<String>, id: u64) -> Self {
        Self {
            creator: creator.into(),
            id,
        }
    }

    pub fn signers(&self, rules: &AddressRules) -> Result<Vec<AccAddress>> {
        Ok(vec![AccAddress::parse(&self.creator, rules)?])
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl TradeOrder {
    /// A well-formed creator address for the default prefix.
    pub fn dummy_creator() -> String {
        AccAddress::encode(crate::constants::DEFAULT_ADDRESS_HRP, &[42u8; 20])
            .expect("dummy creator address")
            .to_string()
    }

    /// An order with no inputs or outputs, created by [`Self::dummy_creator`].
    pub fn dummy_empty() -> Self {
        Self::new(
            Self::dummy_creator(),
            Vec::new(),
            Vec::new(),
            Coins::default(),
            Vec::new(),
            "",
        )
    }

    /// Builder-style coin input from a coin string such as `"100uatom"`.
    #[must_use]
    pub fn with_coin_input(mut self, coins: &str) -> Self {
        self.coin_inputs
            .push(CoinInput::new(coins.parse().expect("test coin string")));
        self
    }

    /// Builder-style coin outputs from a coin string.
    #[must_use]
    pub fn with_coin_outputs(mut self, coins: &str) -> Self {
        self.coin_outputs = coins.parse().expect("test coin string");
        self
    }

    #[must_use]
    pub fn with_item_input(mut self, input: ItemInput) -> Self {
        self.item_inputs.push(input);
        self
    }

    #[must_use]
    pub fn with_item_output(mut self, output: ItemRef) -> Self {
        self.item_outputs.push(output);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denoms_cover_inputs_then_outputs() {
        let order = TradeOrder::dummy_empty()
            .with_coin_input("10uatom")
            .with_coin_input("5cookbook/gold,7uatom")
            .with_coin_outputs("3uusd");
        let denoms: Vec<&str> = order.denoms().collect();
        assert_eq!(denoms, vec!["uatom", "cookbook/gold", "uatom", "uusd"]);
    }

    #[test]
    #[should_panic(expected = "test coin string")]
    fn coin_input_builder_panics_on_typo() {
        let _ = TradeOrder::dummy_empty().with_coin_input("100 uatom");
    }

    #[test]
    #[should_panic(expected = "test coin string")]
    fn coin_outputs_builder_panics_on_typo() {
        let _ = TradeOrder::dummy_empty().with_coin_outputs("uatom100");
    }

    #[test]
    fn signers_parse_creator() {
        let order = TradeOrder::dummy_empty();
        let signers = order.signers(&AddressRules::default()).unwrap();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].as_str(), order.creator);
    }

    #[test]
    fn cancel_signers_reject_bad_creator() {
        let cancel = CancelTrade::new("nope", 4);
        assert!(cancel.signers(&AddressRules::default()).is_err());
    }

    #[test]
    fn item_input_validate() {
        let ok = ItemInput::new(ItemRef::new("cookbook", "abc"), ConstraintSet::new());
        assert!(ok.validate().is_ok());
        let bad = ItemInput::new(
            ItemRef::new("cookbook", "abc"),
            ConstraintSet::new().require_text_key(""),
        );
        assert!(bad.validate().is_err());
    }

    #[test]
    fn decodes_from_json() {
        let json = format!(
            r#"{{
                "creator": "{}",
                "coinInputs": [{{"coins": [{{"denom": "uatom", "amount": "100"}}]}}],
                "itemOutputs": [{{"cookbookId": "cb", "itemId": "abc"}}]
            }}"#,
            TradeOrder::dummy_creator()
        );
        let order: TradeOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order.coin_inputs.len(), 1);
        assert!(order.coin_outputs.is_empty());
        assert_eq!(order.item_outputs[0], ItemRef::new("cb", "abc"));
        assert!(order.extra_info.is_empty());
    }
}
