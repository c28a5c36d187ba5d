//! Core types for the marketplace analytics crates

pub mod listing;
pub mod price;

pub use listing::*;
pub use price::*;
