//! Canned listing fixtures

use market_common::{SaleRecord, Seller, TokenId};

/// Three listings across two sellers; seller "A" is first-seen before "B"
/// and both end up with a total of 2.
#[must_use]
pub fn mixed_sellers() -> Vec<SaleRecord> {
    vec![
        SaleRecord::new(TokenId::new(1), Seller::new("A"), "1.5"),
        SaleRecord::new(TokenId::new(2), Seller::new("B"), "2"),
        SaleRecord::new(TokenId::new(3), Seller::new("A"), "0.5"),
    ]
}

/// `count` listings for one seller, price "1" each
#[must_use]
pub fn single_seller(count: usize) -> Vec<SaleRecord> {
    (1..=count as u64)
        .map(|id| SaleRecord::new(TokenId::new(id), Seller::new("solo"), "1"))
        .collect()
}

/// A listing page as the metadata provider actually serves it
#[must_use]
pub const fn marketplace_page_json() -> &'static str {
    r#"[
        {
            "tokenId": 4,
            "seller": "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
            "owner": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
            "price": "0.25",
            "name": "Orbital Decay",
            "description": "Generative orbit study",
            "image": "https://cdn.example.com/tokens/4.png"
        },
        {
            "tokenId": 3,
            "seller": "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B",
            "owner": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
            "price": "1.1",
            "name": "Sunset Gradient",
            "description": "One of one",
            "image": "https://cdn.example.com/tokens/3.png"
        },
        {
            "tokenId": 2,
            "seller": "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
            "owner": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
            "price": "0.75",
            "name": "Sunset Mirror",
            "description": "Companion piece",
            "image": "https://cdn.example.com/tokens/2.png"
        },
        {
            "tokenId": 1,
            "seller": "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF",
            "owner": "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
            "price": "3",
            "name": "Genesis Block",
            "description": "First mint of the collection",
            "image": "https://cdn.example.com/tokens/1.png"
        }
    ]"#
}

/// The parsed form of [`marketplace_page_json`]
///
/// # Panics
///
/// Panics if the fixture stops being valid JSON.
#[must_use]
pub fn marketplace_page() -> Vec<SaleRecord> {
    serde_json::from_str(marketplace_page_json()).expect("fixture parses")
}
