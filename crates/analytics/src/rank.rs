//! Top-creator ranking

use crate::aggregators::CreatorTotal;
use market_common::{Price, Seller};
use serde::{Deserialize, Serialize};

/// One entry on the top-sellers rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCreator {
    /// 1-based rank position
    pub rank: usize,
    /// Seller identity
    pub seller: Seller,
    /// Aggregated listing volume
    pub total: Price,
}

/// Rank creators by total descending and keep the first `limit`.
///
/// The sort is stable, so sellers with equal totals keep their first-seen
/// order from aggregation. Fewer than `limit` creators yields a shorter
/// list; ranks past the population are omitted, never padded.
#[must_use]
pub fn top_creators(totals: &[CreatorTotal], limit: usize) -> Vec<RankedCreator> {
    let mut ordered: Vec<&CreatorTotal> = totals.iter().collect();
    ordered.sort_by(|a, b| b.total.cmp(&a.total));

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, entry)| RankedCreator {
            rank: position + 1,
            seller: entry.seller.clone(),
            total: entry.total,
        })
        .collect()
}
