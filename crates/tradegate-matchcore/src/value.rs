//! Per-domain value equality.
//!
//! The matcher is generic over the value type of an attribute table; this
//! trait supplies the equality each domain uses.

use rust_decimal::Decimal;

/// Equality used when comparing a stored attribute with a required one.
pub trait AttributeValue {
    fn same_value(&self, required: &Self) -> bool;
}

/// Text: exact string equality.
impl AttributeValue for String {
    fn same_value(&self, required: &Self) -> bool {
        self == required
    }
}

/// Decimal: equality of the numeric value, independent of scale.
/// `1.50` and `1.5` are the same value.
impl AttributeValue for Decimal {
    fn same_value(&self, required: &Self) -> bool {
        self.normalize() == required.normalize()
    }
}

/// Integer: exact equality.
impl AttributeValue for i64 {
    fn same_value(&self, required: &Self) -> bool {
        self == required
    }
}
