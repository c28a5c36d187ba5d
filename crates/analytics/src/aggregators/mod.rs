//! Aggregation routines over marketplace listings

pub mod creators;

pub use creators::{CreatorTotal, aggregate_by_seller};
