//! Marketplace listing types

use crate::constants::{SELLER_HEAD_LEN, SELLER_TAIL_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token identifier for listed NFTs (mint ordinal; higher means newer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    /// Create a new `TokenId` with the given ordinal
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Seller identity (marketplace address, compared case-sensitively, never normalized)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seller(String);

impl Seller {
    /// Create a new seller identity
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the full address
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Elided display form ("0x4b3...9f2a"); short addresses come back whole
    #[must_use]
    pub fn shorten(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= SELLER_HEAD_LEN + SELLER_TAIL_LEN {
            return self.0.clone();
        }
        let head: String = chars[..SELLER_HEAD_LEN].iter().collect();
        let tail: String = chars[chars.len() - SELLER_TAIL_LEN..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Seller {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

/// One marketplace listing as resolved by the metadata provider
///
/// The price stays in the provider's decimal-string form; consuming
/// operations parse it so malformed input can be reported per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Token identifier
    pub token_id: TokenId,
    /// Listing party
    pub seller: Seller,
    /// Holding address while listed (escrow) or current owner
    pub owner: String,
    /// Listing price as a decimal base-currency string
    pub price: String,
    /// Token name from metadata
    pub name: String,
    /// Token description from metadata
    pub description: String,
    /// Token image URL from metadata
    pub image: String,
}

impl SaleRecord {
    /// Create a new listing with empty owner and metadata fields
    #[must_use]
    pub fn new(token_id: TokenId, seller: Seller, price: impl Into<String>) -> Self {
        Self {
            token_id,
            seller,
            owner: String::new(),
            price: price.into(),
            name: String::new(),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Set the holding address
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Attach resolved metadata fields
    #[must_use]
    pub fn with_metadata(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.description = description.into();
        self.image = image.into();
        self
    }
}
