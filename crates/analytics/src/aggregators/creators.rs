//! Per-seller sale aggregation

use crate::errors::AnalyticsError;
use market_common::{Price, SaleRecord, Seller};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregated listing volume for one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorTotal {
    /// Seller identity
    pub seller: Seller,
    /// Sum of listing prices across the seller's records
    pub total: Price,
}

/// Group records by seller and sum the listing price per group.
///
/// Output order is the order in which each distinct seller first appears in
/// the input; ranking by total is a separate downstream step. The first
/// record whose price string does not parse fails the whole operation with
/// the record's position and seller.
///
/// # Errors
///
/// [`AnalyticsError::MalformedRecord`] for an unparsable price,
/// [`AnalyticsError::TotalOverflow`] if a seller's sum leaves the
/// fixed-point range.
pub fn aggregate_by_seller(records: &[SaleRecord]) -> Result<Vec<CreatorTotal>, AnalyticsError> {
    let mut totals: Vec<CreatorTotal> = Vec::new();
    // Seller -> slot in `totals`, so first-seen order survives the grouping
    let mut slots: FxHashMap<Seller, usize> = FxHashMap::default();

    for (index, record) in records.iter().enumerate() {
        let price: Price =
            record
                .price
                .parse()
                .map_err(|source| AnalyticsError::MalformedRecord {
                    index,
                    seller: record.seller.clone(),
                    value: record.price.clone(),
                    source,
                })?;

        if let Some(&slot) = slots.get(&record.seller) {
            let entry = &mut totals[slot];
            entry.total =
                entry
                    .total
                    .checked_add(price)
                    .ok_or_else(|| AnalyticsError::TotalOverflow {
                        seller: record.seller.clone(),
                    })?;
        } else {
            slots.insert(record.seller.clone(), totals.len());
            totals.push(CreatorTotal {
                seller: record.seller.clone(),
                total: price,
            });
        }
    }

    debug!(
        "aggregated {} records into {} creator totals",
        records.len(),
        totals.len()
    );
    Ok(totals)
}
