//! # tradegate-matchcore
//!
//! **Pure attribute matcher for tradegate.**
//!
//! Decides whether an item satisfies a constraint set. It has:
//!
//! - **Zero side effects**: no storage, no mutation of its inputs
//! - **Total answers**: a missing attribute is `false`, never an error
//! - **One code path for all domains**: text, decimal and integer tables are
//!   checked by the same generic routine with per-domain equality
//!
//! Used to gate item consumption in trades and crafting, and by
//! verification tooling to compare actual items against expected fixtures.

pub mod matcher;
pub mod selection;
pub mod value;

pub use matcher::{Mismatch, mismatches, satisfies};
pub use selection::{input_accepts, select_eligible, unmet_expectations};
pub use value::AttributeValue;
