//! Listing sort orders for the browse grid

use crate::errors::AnalyticsError;
use market_common::{Price, SaleRecord};
use serde::{Deserialize, Serialize};

/// Sort order for a listing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest mints first (descending token id)
    #[default]
    RecentlyAdded,
    /// Cheapest listings first
    PriceLowToHigh,
    /// Most expensive listings first
    PriceHighToLow,
}

/// Sort listings in place according to `order`.
///
/// Price orders parse every record's price string up front and fail on the
/// first malformed record, leaving the input untouched. All sorts are
/// stable.
///
/// # Errors
///
/// [`AnalyticsError::MalformedRecord`] when a price order meets an
/// unparsable price.
pub fn sort_listings(
    records: &mut Vec<SaleRecord>,
    order: SortOrder,
) -> Result<(), AnalyticsError> {
    match order {
        SortOrder::RecentlyAdded => {
            records.sort_by(|a, b| b.token_id.cmp(&a.token_id));
            Ok(())
        }
        SortOrder::PriceLowToHigh => sort_by_price(records, false),
        SortOrder::PriceHighToLow => sort_by_price(records, true),
    }
}

fn sort_by_price(records: &mut Vec<SaleRecord>, descending: bool) -> Result<(), AnalyticsError> {
    let mut keys: Vec<Price> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let price =
            record
                .price
                .parse()
                .map_err(|source| AnalyticsError::MalformedRecord {
                    index,
                    seller: record.seller.clone(),
                    value: record.price.clone(),
                    source,
                })?;
        keys.push(price);
    }

    // Every key parsed; safe to take the records apart now
    let mut keyed: Vec<(Price, SaleRecord)> = keys.into_iter().zip(records.drain(..)).collect();
    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    records.extend(keyed.into_iter().map(|(_, record)| record));
    Ok(())
}
