//! Analytics configuration

use crate::sort::SortOrder;
use market_common::constants::DEFAULT_TOP_CREATORS;
use serde::{Deserialize, Serialize};

/// Display-layer analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Creators shown on the top-sellers rail
    pub top_creators: usize,

    /// Sort order applied to a freshly fetched listing page
    pub default_sort: SortOrder,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_creators: DEFAULT_TOP_CREATORS,
            default_sort: SortOrder::default(),
        }
    }
}
