//! System-wide constants for tradegate.

/// Default bech32 human-readable prefix for account addresses.
pub const DEFAULT_ADDRESS_HRP: &str = "pylo";

/// Maximum decoded address payload length in bytes.
pub const MAX_ADDRESS_LEN: usize = 255;

/// Default path prefix of bridged (cross-chain transferred) denominations.
pub const DEFAULT_BRIDGE_PREFIX: &str = "ibc";

/// Number of hex digits in a bridged denomination hash (SHA-256).
pub const BRIDGE_HASH_HEX_LEN: usize = 64;

/// Separator between a cookbook id and the coin name of a module-native denom.
pub const DENOM_SEPARATOR: char = '/';

/// Syntax every coin denomination must follow.
pub const DENOM_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9/:._-]{2,127}$";

/// Syntax of cookbook ids and other generic identifiers.
pub const ID_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_-]{0,127}$";

/// Syntax of item ids: base58 alphabet, at most the width of an encoded `u64`.
pub const ITEM_ID_PATTERN: &str = r"^[1-9A-HJ-NP-Za-km-z]{1,11}$";

/// Syntax of the coin-name half of a module-native denomination.
pub const NATIVE_COIN_NAME_PATTERN: &str = r"^[a-z][a-z0-9._-]{2,127}$";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
