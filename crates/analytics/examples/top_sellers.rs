//! Example: turn a fetched listing page into the home-page views
//!
//! Builds a small page of listings, then computes the top-sellers rail,
//! re-sorts the grid by price, and runs a name search.

use anyhow::Result;
use market_analytics::{
    AnalyticsConfig, SortOrder, filter_by_name, sort_listings, top_sellers,
};
use market_common::{SaleRecord, Seller, TokenId};
use tracing::{Level, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let listings = vec![
        listing(1, "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF", "3", "Genesis Block"),
        listing(2, "0x8ba1f109551bD432803012645Ac136ddd64DBA72", "0.75", "Sunset Mirror"),
        listing(3, "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B", "1.1", "Sunset Gradient"),
        listing(4, "0x8ba1f109551bD432803012645Ac136ddd64DBA72", "0.25", "Orbital Decay"),
    ];

    let config = AnalyticsConfig::default();

    info!("Top sellers");
    for creator in top_sellers(&listings, &config)? {
        info!(
            "  {}. {} - {} ETH",
            creator.rank,
            creator.seller.shorten(),
            creator.total
        );
    }

    let mut grid = listings.clone();
    sort_listings(&mut grid, SortOrder::PriceLowToHigh)?;
    info!("Cheapest listing: {} at {} ETH", grid[0].name, grid[0].price);

    let matched = filter_by_name(&listings, "sunset");
    info!("Search \"sunset\" matched {} listings", matched.len());

    Ok(())
}

fn listing(token_id: u64, seller: &str, price: &str, name: &str) -> SaleRecord {
    SaleRecord::new(TokenId::new(token_id), Seller::new(seller), price)
        .with_owner("0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D")
        .with_metadata(name, "", format!("https://cdn.example.com/tokens/{token_id}.png"))
}
