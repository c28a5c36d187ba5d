//! Common constants used across the analytics crates
//!
//! Single source of truth for all magic numbers

// Fixed-point arithmetic constants
/// Base units (wei) per whole price unit (ether)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;
/// Fractional digits a price string may carry
pub const PRICE_DECIMALS: u32 = 18;

// Display constants
/// Leading characters kept when eliding a seller address
pub const SELLER_HEAD_LEN: usize = 5;
/// Trailing characters kept when eliding a seller address
pub const SELLER_TAIL_LEN: usize = 4;

// Ranking constants
/// Creators shown on the top-sellers rail
pub const DEFAULT_TOP_CREATORS: usize = 5;
