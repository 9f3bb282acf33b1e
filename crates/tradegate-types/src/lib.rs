//! # tradegate-types
//!
//! Shared types, errors, and configuration for **tradegate**.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Items**: [`Item`], [`AttributeTable`], [`AttributeDomain`]
//! - **Constraints**: [`ConstraintSet`], [`DomainRequirement`], [`ItemExpectation`]
//! - **Coins**: [`Coin`], [`Coins`]
//! - **Identifiers**: [`AccAddress`], [`ItemRef`], [`validate_id`], [`validate_item_id`]
//! - **Trade model**: [`TradeOrder`], [`CoinInput`], [`ItemInput`], [`CancelTrade`]
//! - **Configuration**: [`ValidationConfig`], [`AddressRules`], [`DenomRules`]
//! - **Errors**: [`ValidationError`], [`FormatError`] with `TG_ERR_` prefix codes
//! - **Constants**: patterns, prefixes and limits

pub mod coin;
pub mod config;
pub mod constants;
pub mod constraint;
pub mod error;
pub mod ids;
pub mod item;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use tradegate_types::{Item, ConstraintSet, TradeOrder, ...};

pub use coin::*;
pub use config::*;
pub use constraint::*;
pub use error::*;
pub use ids::*;
pub use item::*;
pub use trade::*;

// Constants are accessed via `tradegate_types::constants::FOO`
// (not re-exported to avoid name collisions).
