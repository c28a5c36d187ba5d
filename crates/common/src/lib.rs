//! Common domain types for the marketplace analytics crates

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
