//! Marketplace Analytics
//!
//! Pure, synchronous transformations over marketplace listing data:
//! - Per-seller sale aggregation (first-seen order preserved)
//! - Top-creator ranking with stable tie-breaks
//! - Listing sort orders for the browse grid
//! - Case-insensitive name search

pub mod aggregators;
pub mod config;
pub mod errors;
pub mod filter;
pub mod rank;
pub mod sort;

pub use aggregators::{CreatorTotal, aggregate_by_seller};
pub use config::AnalyticsConfig;
pub use errors::AnalyticsError;
pub use filter::filter_by_name;
pub use rank::{RankedCreator, top_creators};
pub use sort::{SortOrder, sort_listings};

use market_common::SaleRecord;
use tracing::debug;

/// Aggregate and rank in one step: the top-sellers rail for a listing page.
///
/// # Errors
///
/// Propagates [`AnalyticsError`] from aggregation; ranking itself cannot
/// fail.
pub fn top_sellers(
    records: &[SaleRecord],
    config: &AnalyticsConfig,
) -> Result<Vec<RankedCreator>, AnalyticsError> {
    let totals = aggregate_by_seller(records)?;
    let ranked = top_creators(&totals, config.top_creators);
    debug!("ranked {} of {} creators", ranked.len(), totals.len());
    Ok(ranked)
}
