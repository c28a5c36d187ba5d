//! Fixed-point listing prices

use crate::constants::{PRICE_DECIMALS, PRICE_SCALE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Listing price (stored as u128 base units for determinism, 18 decimal places)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u128); // Internal: price in wei (1 wei = 10^-18)

impl Price {
    /// Zero price
    pub const ZERO: Self = Self(0);

    /// Create from base units (wei)
    #[must_use]
    pub const fn from_base_units(units: u128) -> Self {
        Self(units)
    }

    /// Create from whole price units (ether)
    #[must_use]
    pub const fn from_whole(whole: u128) -> Self {
        Self(whole * PRICE_SCALE)
    }

    /// Get price as base units
    #[must_use]
    pub const fn as_base_units(&self) -> u128 {
        self.0
    }

    /// Check if price is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add two prices (fixed-point arithmetic), `None` on overflow
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    /// Parse a decimal price string exactly ("2", "1.5", "0.025").
    ///
    /// No sign, no exponent, at most 18 fractional digits. Conversion never
    /// goes through floating point, so every representable input parses to
    /// the exact base-unit count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePriceError::Empty);
        }
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParsePriceError::InvalidDigit {
                value: s.to_string(),
            });
        }
        if frac.len() > PRICE_DECIMALS as usize {
            return Err(ParsePriceError::TooManyDecimals {
                value: s.to_string(),
            });
        }

        let whole_units = if whole.is_empty() {
            0
        } else {
            parse_digits(whole, s)?
        };
        let frac_units = if frac.is_empty() {
            0
        } else {
            // Right-pad to the full scale: "025" at 18 decimals is 25 * 10^15
            #[allow(clippy::cast_possible_truncation)]
            let padding = PRICE_DECIMALS - frac.len() as u32;
            parse_digits(frac, s)? * 10u128.pow(padding)
        };

        whole_units
            .checked_mul(PRICE_SCALE)
            .and_then(|units| units.checked_add(frac_units))
            .map(Self)
            .ok_or_else(|| ParsePriceError::Overflow {
                value: s.to_string(),
            })
    }
}

fn parse_digits(digits: &str, input: &str) -> Result<u128, ParsePriceError> {
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParsePriceError::InvalidDigit {
            value: input.to_string(),
        });
    }
    digits.parse::<u128>().map_err(|_| ParsePriceError::Overflow {
        value: input.to_string(),
    })
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PRICE_SCALE;
        let frac = self.0 % PRICE_SCALE;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let frac = format!("{frac:018}");
        write!(f, "{whole}.{}", frac.trim_end_matches('0'))
    }
}

/// Error parsing a decimal price string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePriceError {
    /// Price string was empty
    #[error("empty price string")]
    Empty,

    /// Price string contained something other than decimal digits
    #[error("invalid digit in price {value:?}")]
    InvalidDigit {
        /// Raw input that failed to parse
        value: String,
    },

    /// More fractional digits than the fixed-point scale carries
    #[error("price {value:?} has more than 18 decimal places")]
    TooManyDecimals {
        /// Raw input that failed to parse
        value: String,
    },

    /// Price does not fit the fixed-point range
    #[error("price {value:?} overflows the fixed-point range")]
    Overflow {
        /// Raw input that failed to parse
        value: String,
    },
}
