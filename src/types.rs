use alloy::primitives::{utils, Address, U256};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::quantity::QuantityBounds;

/// Handle to the drop contract a storefront sells from.
///
/// `token_id` is only meaningful for ERC-1155 contracts, but it is always part of
/// the handle so the same value can be used as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRef {
    pub address: Address,
    pub chain_id: u64,
    pub token_id: U256,
}

impl ContractRef {
    pub fn new(address: Address, chain_id: u64, token_id: U256) -> Self {
        Self {
            address,
            chain_id,
            token_id,
        }
    }
}

/// Token standard implemented by a contract. Exactly one applies at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenStandard {
    /// ERC-20 style drop. Used as the fallback when no NFT interface is detected.
    Fungible,
    /// ERC-721 style drop.
    NonFungibleSingle,
    /// ERC-1155 style drop, where every claim targets a single token id.
    #[serde(rename_all = "camelCase")]
    NonFungibleMulti { token_id: U256 },
}

impl TokenStandard {
    /// Multi-token wins over single, and anything else is fungible.
    pub fn from_probes(is_multi_token: bool, is_single_nonfungible: bool, token_id: U256) -> Self {
        match (is_multi_token, is_single_nonfungible) {
            (true, _) => TokenStandard::NonFungibleMulti { token_id },
            (false, true) => TokenStandard::NonFungibleSingle,
            (false, false) => TokenStandard::Fungible,
        }
    }

    pub fn token_id(&self) -> Option<U256> {
        match self {
            TokenStandard::NonFungibleMulti { token_id } => Some(*token_id),
            _ => None,
        }
    }
}

impl Display for TokenStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenStandard::Fungible => write!(f, "ERC20"),
            TokenStandard::NonFungibleSingle => write!(f, "ERC721"),
            TokenStandard::NonFungibleMulti { token_id } => write!(f, "ERC1155 (token {token_id})"),
        }
    }
}

/// Name, description and image as published by a contract or token metadata document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The claim phase that is currently open on a drop contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveClaimCondition {
    pub price_per_token: U256,
    pub currency: Address,
    pub start_timestamp: U256,
    pub max_claimable_supply: U256,
    pub supply_claimed: U256,
    pub quantity_limit_per_wallet: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// An exact token amount in the currency's smallest unit together with its decimals.
///
/// Arithmetic happens on `raw`, so multiplying by a quantity never loses precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn checked_mul(&self, quantity: u32) -> Option<Self> {
        self.raw
            .checked_mul(U256::from(quantity))
            .map(|raw| Self::new(raw, self.decimals))
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&format_units(self.raw, self.decimals))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TokenAmount", 3)?;
        state.serialize_field("raw", &self.raw.to_string())?;
        state.serialize_field("decimals", &self.decimals)?;
        state.serialize_field("formatted", &self.to_string())?;
        state.end()
    }
}

/// Formats `raw / 10^decimals` with at least one fractional digit and no trailing zeros.
pub fn format_units(raw: U256, decimals: u8) -> String {
    // alloy caps units at 77; larger decimals are only shown in exponent form
    let Ok(formatted) = utils::format_units(raw, decimals) else {
        return format!("{raw}e-{decimals}");
    };

    match formatted.trim_end_matches('0') {
        trimmed if trimmed.ends_with('.') => format!("{trimmed}0"),
        trimmed => trimmed.to_string(),
    }
}

/// Normalized, UI-ready summary of the item a storefront sells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub display_name: String,
    pub description: String,
    pub image_url: String,
    /// `None` when the claim condition or its currency could not be resolved.
    pub price_per_unit: Option<TokenAmount>,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSupply {
    pub claimed: String,
    pub max_claimable: String,
    pub limit_per_wallet: String,
}

impl From<&ActiveClaimCondition> for ClaimSupply {
    fn from(condition: &ActiveClaimCondition) -> Self {
        Self {
            claimed: condition.supply_claimed.to_string(),
            max_claimable: condition.max_claimable_supply.to_string(),
            limit_per_wallet: condition.quantity_limit_per_wallet.to_string(),
        }
    }
}

/// Everything the storefront page needs to render the purchase form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub contract: ContractRef,
    pub standard: TokenStandard,
    pub record: DisplayRecord,
    pub supply: Option<ClaimSupply>,
    pub quantity: QuantityBounds,
}
