//! Trade validator: the admission gate for trade orders.
//!
//! Every trade order is checked here before it is handed to escrow and
//! matching. Rules run in a fixed order and the first violation is
//! reported:
//!
//! 1. creator address parses
//! 2. each coin input is well-formed
//! 3. coin outputs, if any, are well-formed
//! 4. at most one payment denomination across the whole order
//! 5. each item output reference is well-formed
//! 6. each item input is well-formed
//!
//! The validator holds only configuration; every check takes `&self`, so one
//! instance can be shared freely across threads.

use tradegate_types::{
    AccAddress, CancelTrade, Coins, DenomScope, FormatError, Item, TradeOrder, ValidationConfig,
    ValidationError,
};

use crate::denom::DenomClassifier;
use crate::payment::{PaymentConflict, PaymentSlot};

fn conflict(scope: DenomScope, c: PaymentConflict<'_>) -> ValidationError {
    ValidationError::MultiplePaymentDenoms {
        scope,
        first: c.first.to_string(),
        second: c.second.to_string(),
    }
}

/// Stateless trade order admission checks.
#[derive(Debug, Clone)]
pub struct TradeValidator {
    config: ValidationConfig,
    classifier: DenomClassifier,
}

impl TradeValidator {
    /// Create a validator with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
            classifier: DenomClassifier::default(),
        }
    }

    /// Create a validator with custom rules.
    ///
    /// # Errors
    /// Returns [`FormatError::Configuration`] if the rules are unusable.
    pub fn with_config(config: ValidationConfig) -> Result<Self, FormatError> {
        config.check()?;
        let classifier = DenomClassifier::new(&config.denoms)?;
        Ok(Self { config, classifier })
    }

    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    #[must_use]
    pub fn classifier(&self) -> &DenomClassifier {
        &self.classifier
    }

    /// Validate a trade order against all rules.
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(&self, order: &TradeOrder) -> Result<(), ValidationError> {
        match self.run_checks(order) {
            Ok(payment) => {
                tracing::debug!(
                    creator = %order.creator,
                    coin_inputs = order.coin_inputs.len(),
                    item_inputs = order.item_inputs.len(),
                    item_outputs = order.item_outputs.len(),
                    payment_denom = payment.unwrap_or("none"),
                    "Trade order accepted"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    creator = %order.creator,
                    rule = err.rule(),
                    error = %err,
                    "Trade order rejected"
                );
                Err(err)
            }
        }
    }

    /// The single payment denomination of `order`, if it has one.
    ///
    /// Runs only the payment rule; the coin amounts are assumed well-formed.
    ///
    /// # Errors
    /// [`ValidationError::MultiplePaymentDenoms`] or
    /// [`ValidationError::AmbiguousDenom`].
    pub fn payment_denom<'a>(
        &self,
        order: &'a TradeOrder,
    ) -> Result<Option<&'a str>, ValidationError> {
        let mut order_slot = PaymentSlot::Open;

        for input in &order.coin_inputs {
            let mut input_slot = PaymentSlot::Open;
            for coin in &input.coins {
                if self.classifier.classify(&coin.denom)?.is_payment_eligible() {
                    input_slot
                        .offer(&coin.denom)
                        .map_err(|c| conflict(DenomScope::Inputs, c))?;
                }
            }
            if let Some(denom) = input_slot.chosen() {
                order_slot
                    .offer(denom)
                    .map_err(|c| conflict(DenomScope::Outputs, c))?;
            }
        }

        for coin in &order.coin_outputs {
            if self.classifier.classify(&coin.denom)?.is_payment_eligible() {
                order_slot
                    .offer(&coin.denom)
                    .map_err(|c| conflict(DenomScope::Outputs, c))?;
            }
        }

        Ok(order_slot.chosen())
    }

    /// Validate a cancellation request: only the creator address is checked.
    ///
    /// # Errors
    /// [`ValidationError::InvalidCreator`].
    pub fn validate_cancel(&self, cancel: &CancelTrade) -> Result<(), ValidationError> {
        self.check_creator(&cancel.creator).inspect_err(|err| {
            tracing::debug!(trade = cancel.id, error = %err, "Trade cancel rejected");
        })?;
        Ok(())
    }

    /// For each item input of `order`, the candidate items it accepts.
    pub fn eligible_items<'a>(&self, order: &TradeOrder, items: &'a [Item]) -> Vec<Vec<&'a Item>> {
        order
            .item_inputs
            .iter()
            .map(|input| tradegate_matchcore::select_eligible(input, items))
            .collect()
    }

    // -----------------------------------------------------------------
    // Rules
    // -----------------------------------------------------------------

    fn run_checks<'a>(&self, order: &'a TradeOrder) -> Result<Option<&'a str>, ValidationError> {
        // 1. Creator
        self.check_creator(&order.creator)?;

        // 2. Coin inputs
        for (index, input) in order.coin_inputs.iter().enumerate() {
            input
                .coins
                .validate()
                .map_err(|e| ValidationError::InvalidCoinInput {
                    index,
                    reason: e.to_string(),
                })?;
        }

        // 3. Coin outputs
        Self::check_coin_outputs(&order.coin_outputs)?;

        // 4. Single payment denomination
        let payment = self.payment_denom(order)?;

        // 5. Item outputs
        for (index, item) in order.item_outputs.iter().enumerate() {
            item.validate()
                .map_err(|e| ValidationError::InvalidItemOutput {
                    index,
                    reason: e.to_string(),
                })?;
        }

        // 6. Item inputs
        for (index, input) in order.item_inputs.iter().enumerate() {
            input
                .validate()
                .map_err(|e| ValidationError::InvalidItemInput {
                    index,
                    reason: e.to_string(),
                })?;
        }

        Ok(payment)
    }

    fn check_creator(&self, creator: &str) -> Result<AccAddress, ValidationError> {
        AccAddress::parse(creator, &self.config.address).map_err(|e| {
            ValidationError::InvalidCreator {
                reason: e.to_string(),
            }
        })
    }

    fn check_coin_outputs(outputs: &Coins) -> Result<(), ValidationError> {
        if outputs.is_empty() {
            return Ok(());
        }
        outputs
            .validate()
            .map_err(|e| ValidationError::InvalidCoinOutputs {
                reason: e.to_string(),
            })
    }
}

impl Default for TradeValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tradegate_types::*;

    use super::*;

    const ATOM_HASH: &str = "27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";

    fn sword_input() -> ItemInput {
        ItemInput::new(
            ItemRef::new("cookbookLOUD", "2PqmBx7D"),
            ConstraintSet::new().require_text("Name", "Sword"),
        )
    }

    fn prize() -> ItemRef {
        ItemRef::new("cookbookLOUD", "9xZ")
    }

    #[test]
    fn single_payment_with_items_passes() {
        let v = TradeValidator::new();
        let order = TradeOrder::dummy_empty()
            .with_coin_input("100uatom")
            .with_item_input(sword_input())
            .with_item_output(prize());
        assert!(v.validate(&order).is_ok());
        assert_eq!(v.payment_denom(&order).unwrap(), Some("uatom"));
    }

    #[test]
    fn empty_order_passes() {
        assert!(TradeValidator::new().validate(&TradeOrder::dummy_empty()).is_ok());
    }

    #[test]
    fn malformed_creator_reported_first() {
        let mut order = TradeOrder::dummy_empty()
            .with_coin_input("10uatom,5uusd")
            .with_item_output(ItemRef::new("", ""));
        order.creator = "pylo1garbage".into();
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCreator { .. }), "{err}");
    }

    #[test]
    fn invalid_coin_input_reports_index() {
        let order = TradeOrder::dummy_empty()
            .with_coin_input("10uatom")
            .with_coin_input("5uusd,10uatom");
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidCoinInput { index: 1, .. }),
            "{err}"
        );
    }

    #[test]
    fn invalid_coin_outputs() {
        let mut order = TradeOrder::dummy_empty().with_coin_input("10uatom");
        order.coin_outputs = Coins::new(vec![Coin::new(0, "uatom")]);
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCoinOutputs { .. }), "{err}");
    }

    #[test]
    fn two_payment_denoms_in_one_input() {
        let order = TradeOrder::dummy_empty().with_coin_input("10uatom,5uusd");
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MultiplePaymentDenoms {
                scope: DenomScope::Inputs,
                first: "uatom".into(),
                second: "uusd".into(),
            }
        );
    }

    #[test]
    fn bridged_and_generic_in_one_input_conflict() {
        let order = TradeOrder::dummy_empty().with_coin_input(&format!("10ibc/{ATOM_HASH},5uusd"));
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MultiplePaymentDenoms {
                scope: DenomScope::Inputs,
                ..
            }
        ));
    }

    #[test]
    fn native_denoms_never_take_payment_role() {
        let order = TradeOrder::dummy_empty()
            .with_coin_input("5cookbookLOUD/gold,10uatom,3zcookbook/silver")
            .with_coin_outputs("1cookbookLOUD/gems,4uatom");
        let v = TradeValidator::new();
        assert!(v.validate(&order).is_ok());
        assert_eq!(v.payment_denom(&order).unwrap(), Some("uatom"));
    }

    #[test]
    fn output_with_second_payment_denom() {
        let order = TradeOrder::dummy_empty()
            .with_coin_input("100uatom")
            .with_coin_outputs("50uusd");
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MultiplePaymentDenoms {
                scope: DenomScope::Outputs,
                first: "uatom".into(),
                second: "uusd".into(),
            }
        );
    }

    #[test]
    fn ambiguous_denom_rejected() {
        let denom = format!("ibc/{}", "ab".repeat(32));
        let order = TradeOrder::dummy_empty().with_coin_input(&format!("1{denom}"));
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert_eq!(err, ValidationError::AmbiguousDenom { denom });
    }

    #[test]
    fn invalid_item_output_reports_index() {
        let order = TradeOrder::dummy_empty()
            .with_item_output(prize())
            .with_item_output(ItemRef::new("cookbookLOUD", "0OIl"));
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidItemOutput { index: 1, .. }),
            "{err}"
        );
    }

    #[test]
    fn invalid_item_input_reports_index() {
        let bad = ItemInput::new(
            ItemRef::new("cookbookLOUD", "2PqmBx7D"),
            ConstraintSet::new()
                .require_integer_key("level")
                .require_integer_key("level"),
        );
        let order = TradeOrder::dummy_empty().with_item_input(bad);
        let err = TradeValidator::new().validate(&order).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidItemInput { index: 0, .. }),
            "{err}"
        );
    }

    #[test]
    fn cancel_checks_creator_only() {
        let v = TradeValidator::new();
        assert!(v.validate_cancel(&CancelTrade::new(TradeOrder::dummy_creator(), 7)).is_ok());
        let err = v.validate_cancel(&CancelTrade::new("", 7)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCreator { .. }));
    }

    #[test]
    fn custom_hrp_rejects_default_addresses() {
        let config = ValidationConfig {
            address: AddressRules {
                hrp: "cosmos".into(),
                ..AddressRules::default()
            },
            ..ValidationConfig::default()
        };
        let v = TradeValidator::with_config(config).unwrap();
        let err = v.validate(&TradeOrder::dummy_empty()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCreator { .. }));
    }

    #[test]
    fn eligible_items_per_input() {
        let sword = Item::new("cookbookLOUD", "2PqmBx7D").with_text("Name", "Sword");
        let axe = Item::new("cookbookLOUD", "2PqmBx7D").with_text("Name", "Axe");
        let order = TradeOrder::dummy_empty().with_item_input(sword_input());
        let items = vec![axe, sword.clone()];
        let eligible = TradeValidator::new().eligible_items(&order, &items);
        assert_eq!(eligible, vec![vec![&sword]]);
    }
}
