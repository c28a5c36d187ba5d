//! Name search over listings

use market_common::SaleRecord;

/// Case-insensitive substring search on listing names.
///
/// Mirrors the search box semantics: an empty query means "show everything",
/// and a query matching nothing also returns the full input so the grid
/// never goes blank.
#[must_use]
pub fn filter_by_name(records: &[SaleRecord], query: &str) -> Vec<SaleRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    let matched: Vec<SaleRecord> = records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matched.is_empty() {
        return records.to_vec();
    }
    matched
}
