//! Attribute matching: does an item satisfy a constraint set?
//!
//! The three domains are checked by one generic routine over
//! [`AttributeTable`], parameterised by [`AttributeValue`] equality. Each
//! domain contributes two checks (key presence, key/value equality); the
//! result is the AND of all six. Domains never interact: a pair requirement
//! does not need its key repeated in the key list, and a key present in the
//! text table says nothing about the integer table.

use std::fmt;

use tradegate_types::{AttributeDomain, AttributeTable, ConstraintSet, DomainRequirement, Item};

use crate::value::AttributeValue;

/// One unmet requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// A required key is absent from the domain's table.
    MissingKey { domain: AttributeDomain, key: String },
    /// The key is present but holds a different value.
    ValueMismatch { domain: AttributeDomain, key: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { domain, key } => write!(f, "{domain} key {key:?} missing"),
            Self::ValueMismatch { domain, key } => {
                write!(f, "{domain} key {key:?} has a different value")
            }
        }
    }
}

/// Check one domain, short-circuiting on the first failure.
fn domain_satisfied<V: AttributeValue>(
    table: &AttributeTable<V>,
    req: &DomainRequirement<'_, V>,
) -> bool {
    req.keys.iter().all(|k| table.contains_key(k))
        && req
            .pairs
            .iter()
            .all(|(k, want)| table.get(k).is_some_and(|have| have.same_value(want)))
}

/// Collect every failure in one domain.
fn domain_mismatches<V: AttributeValue>(
    table: &AttributeTable<V>,
    req: &DomainRequirement<'_, V>,
    out: &mut Vec<Mismatch>,
) {
    for key in req.keys {
        if !table.contains_key(key) {
            out.push(Mismatch::MissingKey {
                domain: req.domain,
                key: key.clone(),
            });
        }
    }
    for (key, want) in req.pairs {
        match table.get(key) {
            None => out.push(Mismatch::MissingKey {
                domain: req.domain,
                key: key.clone(),
            }),
            Some(have) if !have.same_value(want) => out.push(Mismatch::ValueMismatch {
                domain: req.domain,
                key: key.clone(),
            }),
            Some(_) => {}
        }
    }
}

/// Does `item` meet every requirement in `constraints`?
///
/// Total: a missing key is a negative answer, never an error. An empty
/// constraint set is satisfied by any item.
#[must_use]
pub fn satisfies(item: &Item, constraints: &ConstraintSet) -> bool {
    domain_satisfied(&item.texts, &constraints.texts())
        && domain_satisfied(&item.decimals, &constraints.decimals())
        && domain_satisfied(&item.integers, &constraints.integers())
}

/// Every requirement `item` fails, in domain order (text, decimal, integer),
/// keys before pairs. Empty iff [`satisfies`] is true.
#[must_use]
pub fn mismatches(item: &Item, constraints: &ConstraintSet) -> Vec<Mismatch> {
    let mut out = Vec::new();
    domain_mismatches(&item.texts, &constraints.texts(), &mut out);
    domain_mismatches(&item.decimals, &constraints.decimals(), &mut out);
    domain_mismatches(&item.integers, &constraints.integers(), &mut out);
    out
}
