//! Factory patterns for generating listing test data

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use market_common::{SaleRecord, Seller, TokenId};

/// Escrow address a listed token sits under
pub const MARKET_ESCROW: &str = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D";

/// Factory for creating test listings with customization
pub struct SaleRecordFactory {
    default_seller: Seller,
    default_price: String,
}

impl SaleRecordFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_seller: Seller::new("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"),
            default_price: "1.5".to_string(),
        }
    }

    #[must_use]
    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.default_seller = Seller::new(seller);
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.default_price = price.into();
        self
    }

    /// Build one listing; the name is deterministic so search tests can
    /// target it, the description is filler text.
    #[must_use]
    pub fn build(&self, token_id: u64) -> SaleRecord {
        let description: String = Sentence(3..8).fake();
        SaleRecord::new(
            TokenId::new(token_id),
            self.default_seller.clone(),
            self.default_price.clone(),
        )
        .with_owner(MARKET_ESCROW)
        .with_metadata(
            format!("Nifty #{token_id}"),
            description,
            format!("https://cdn.example.com/tokens/{token_id}.png"),
        )
    }

    /// Build `count` listings with token ids 1..=count
    #[must_use]
    pub fn build_batch(&self, count: usize) -> Vec<SaleRecord> {
        (1..=count as u64).map(|id| self.build(id)).collect()
    }
}

impl Default for SaleRecordFactory {
    fn default() -> Self {
        Self::new()
    }
}
