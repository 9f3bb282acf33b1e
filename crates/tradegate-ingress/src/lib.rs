//! # tradegate-ingress
//!
//! **Admission gate for trade orders**: denomination classification and the
//! rules a trade order must pass before it reaches escrow and matching.
//!
//! ## Architecture
//!
//! 1. **DenomClassifier**: sorts denominations into module-native, bridged
//!    and generic by their shape
//! 2. **PaymentSlot**: running "payment denomination chosen so far" state
//! 3. **TradeValidator**: the ordered, fail-fast rule set
//!
//! ## Order Flow
//!
//! ```text
//! decoded TradeOrder → TradeValidator.validate() → Ok(()) | ValidationError
//! ```
//!
//! Everything here is pure: no storage, no balances, no I/O.

pub mod denom;
pub mod payment;
pub mod trade_validator;

pub use denom::{DenomClass, DenomClassifier};
pub use payment::{PaymentConflict, PaymentSlot};
pub use trade_validator::TradeValidator;
