//! Analytics error types

use market_common::{ParsePriceError, Seller};
use thiserror::Error;

/// Errors produced by the analytics operations
///
/// Operations fail whole rather than emitting partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// A record's price string could not be parsed
    #[error("malformed record at index {index} (seller {seller}): price {value:?}")]
    MalformedRecord {
        /// Position of the offending record in the input sequence
        index: usize,
        /// Seller the record belongs to
        seller: Seller,
        /// Raw price value that failed to parse
        value: String,
        /// Underlying parse failure
        source: ParsePriceError,
    },

    /// A seller's running total left the fixed-point range
    #[error("total for seller {seller} overflows the fixed-point range")]
    TotalOverflow {
        /// Seller whose total overflowed
        seller: Seller,
    },
}
