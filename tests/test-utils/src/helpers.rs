//! Helpers for checking aggregation properties against raw input

use market_common::{Price, SaleRecord, Seller};

/// Sum every price in `records` independently of the aggregation under test
///
/// # Panics
///
/// Panics on a malformed price or an out-of-range sum; helpers are for
/// well-formed test input.
#[must_use]
pub fn total_volume(records: &[SaleRecord]) -> Price {
    records.iter().fold(Price::ZERO, |acc, record| {
        let price: Price = record
            .price
            .parse()
            .expect("test record has a valid price");
        acc.checked_add(price)
            .expect("test volume fits the fixed-point range")
    })
}

/// Distinct sellers in first-seen order
#[must_use]
pub fn distinct_sellers(records: &[SaleRecord]) -> Vec<Seller> {
    let mut sellers: Vec<Seller> = Vec::new();
    for record in records {
        if !sellers.contains(&record.seller) {
            sellers.push(record.seller.clone());
        }
    }
    sellers
}
