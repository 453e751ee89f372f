use alloy::primitives::U256;
use serde::Serialize;

use crate::types::{Listing, TokenAmount, TokenStandard};

/// Allowed range for the claim quantity. The lower bound is always one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityBounds {
    min: u32,
    max: Option<u32>,
}

impl QuantityBounds {
    pub const MIN: u32 = 1;

    /// `max` of `None` leaves the quantity unbounded above.
    pub fn new(max: Option<u32>) -> Self {
        Self {
            min: Self::MIN,
            max: max.map(|max| max.max(Self::MIN)),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Clamps a user supplied value, which may be zero or negative, into range.
    pub fn clamp(&self, value: i64) -> u32 {
        let upper = self.max.unwrap_or(u32::MAX) as i64;
        value.clamp(self.min as i64, upper) as u32
    }

    pub fn increment(&self, current: u32) -> u32 {
        self.clamp(current as i64 + 1)
    }

    pub fn decrement(&self, current: u32) -> u32 {
        self.clamp(current as i64 - 1)
    }

    pub fn can_increment(&self, current: u32) -> bool {
        self.max.map_or(true, |max| current < max)
    }

    pub fn can_decrement(&self, current: u32) -> bool {
        current > self.min
    }
}

/// Parameters the wallet's claim button needs to build the mint transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ClaimParams {
    #[serde(rename = "ERC1155", rename_all = "camelCase")]
    Erc1155 { token_id: U256, quantity: u32 },
    #[serde(rename = "ERC721")]
    Erc721 { quantity: u32 },
    #[serde(rename = "ERC20")]
    Erc20 { quantity: u32 },
}

impl ClaimParams {
    pub fn new(standard: TokenStandard, quantity: u32) -> Self {
        match standard {
            TokenStandard::NonFungibleMulti { token_id } => ClaimParams::Erc1155 { token_id, quantity },
            TokenStandard::NonFungibleSingle => ClaimParams::Erc721 { quantity },
            TokenStandard::Fungible => ClaimParams::Erc20 { quantity },
        }
    }
}

/// Price of claiming a given quantity from a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quantity: u32,
    pub unit_price: Option<TokenAmount>,
    pub total: Option<TokenAmount>,
    pub currency_symbol: String,
    pub claim: ClaimParams,
}

impl Quote {
    pub fn new(listing: &Listing, requested: i64) -> Self {
        let quantity = listing.quantity.clamp(requested);
        let unit_price = listing.record.price_per_unit;

        Self {
            quantity,
            unit_price,
            total: unit_price.and_then(|price| price.checked_mul(quantity)),
            currency_symbol: listing.record.currency_symbol.clone(),
            claim: ClaimParams::new(listing.standard, quantity),
        }
    }

    /// Human readable total such as `3.0 ETH`, if a price is known.
    pub fn total_label(&self) -> Option<String> {
        self.total.map(|total| match self.currency_symbol.as_str() {
            "" => total.to_string(),
            symbol => format!("{total} {symbol}"),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp_bounded() {
        let bounds = QuantityBounds::new(Some(10));
        assert_eq!(bounds.clamp(0), 1);
        assert_eq!(bounds.clamp(-5), 1);
        assert_eq!(bounds.clamp(4), 4);
        assert_eq!(bounds.clamp(11), 10);
        assert_eq!(bounds.clamp(i64::MAX), 10);
    }

    #[test]
    fn test_clamp_unbounded() {
        let bounds = QuantityBounds::unbounded();
        assert_eq!(bounds.clamp(0), 1);
        assert_eq!(bounds.clamp(250), 250);
        assert_eq!(bounds.clamp(i64::MAX), u32::MAX);
        assert!(bounds.can_increment(u32::MAX - 1));
    }

    #[test]
    fn test_stepper() {
        let bounds = QuantityBounds::new(Some(10));
        assert_eq!(bounds.decrement(1), 1);
        assert!(!bounds.can_decrement(1));
        assert_eq!(bounds.decrement(3), 2);
        assert_eq!(bounds.increment(9), 10);
        assert_eq!(bounds.increment(10), 10);
        assert!(!bounds.can_increment(10));
    }

    #[test]
    fn test_zero_max_is_raised_to_min() {
        let bounds = QuantityBounds::new(Some(0));
        assert_eq!(bounds.max(), Some(1));
        assert_eq!(bounds.clamp(5), 1);
    }

    #[test]
    fn test_claim_params_serialization() {
        let erc1155 = ClaimParams::new(
            TokenStandard::NonFungibleMulti {
                token_id: U256::from(1),
            },
            3,
        );
        let json = serde_json::to_value(&erc1155).unwrap();
        assert_eq!(json["type"], "ERC1155");
        assert_eq!(json["quantity"], 3);
        assert!(json.get("tokenId").is_some());

        let erc721 = serde_json::to_value(ClaimParams::new(TokenStandard::NonFungibleSingle, 2)).unwrap();
        assert_eq!(erc721, serde_json::json!({ "type": "ERC721", "quantity": 2 }));

        let erc20 = serde_json::to_value(ClaimParams::new(TokenStandard::Fungible, 5)).unwrap();
        assert_eq!(erc20, serde_json::json!({ "type": "ERC20", "quantity": 5 }));
    }
}
