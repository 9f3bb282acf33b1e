//! Applying the matcher to collections: picking the items an item input
//! accepts, and checking expected-item fixtures against actual items.

use tradegate_types::{Item, ItemExpectation, ItemInput};

use crate::matcher::satisfies;

/// An item input accepts `item` when it is the referenced item and meets the
/// input's constraints.
#[must_use]
pub fn input_accepts(input: &ItemInput, item: &Item) -> bool {
    item.is_at(&input.item) && satisfies(item, &input.constraints)
}

/// The items `input` accepts, in the order given.
pub fn select_eligible<'a, I>(input: &ItemInput, items: I) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let eligible: Vec<&Item> = items
        .into_iter()
        .filter(|item| input_accepts(input, item))
        .collect();
    tracing::trace!(
        item = %input.item,
        eligible = eligible.len(),
        "Item input selection"
    );
    eligible
}

/// Indices of the expectations that no item in `items` satisfies.
///
/// Each expectation is checked independently; one item may satisfy several.
#[must_use]
pub fn unmet_expectations(items: &[Item], expectations: &[ItemExpectation]) -> Vec<usize> {
    let unmet: Vec<usize> = expectations
        .iter()
        .enumerate()
        .filter(|(_, exp)| !items.iter().any(|item| satisfies(item, exp)))
        .map(|(i, _)| i)
        .collect();
    if !unmet.is_empty() {
        tracing::debug!(
            unmet = ?unmet,
            items = items.len(),
            expectations = expectations.len(),
            "Item expectations not met"
        );
    }
    unmet
}
