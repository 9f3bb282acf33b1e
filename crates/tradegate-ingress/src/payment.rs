//! Running state for the single-payment-denomination rule.
//!
//! A trade may price itself in at most one bridged or generic denomination.
//! Each scope (one coin input, and the order as a whole) holds a
//! [`PaymentSlot`] that starts open and is filled by the first
//! payment-eligible denomination it sees. Offering a different denomination
//! to a filled slot is a conflict.

/// Payment denomination chosen so far in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentSlot<'a> {
    /// No payment denomination seen yet.
    #[default]
    Open,
    /// This denomination holds the payment role.
    Chosen(&'a str),
}

/// Two distinct denominations competed for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentConflict<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> PaymentSlot<'a> {
    /// Offer `denom` for the payment role. Re-offering the chosen
    /// denomination is accepted.
    pub fn offer(&mut self, denom: &'a str) -> Result<(), PaymentConflict<'a>> {
        match *self {
            Self::Open => {
                *self = Self::Chosen(denom);
                Ok(())
            }
            Self::Chosen(first) if first == denom => Ok(()),
            Self::Chosen(first) => Err(PaymentConflict {
                first,
                second: denom,
            }),
        }
    }

    #[must_use]
    pub fn chosen(&self) -> Option<&'a str> {
        match *self {
            Self::Open => None,
            Self::Chosen(d) => Some(d),
        }
    }
}
