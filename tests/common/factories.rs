use alloy::primitives::{address, Address, U256};
use mintfront::types::{ActiveClaimCondition, ContractRef, CurrencyMetadata, ItemMetadata};

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;
pub const CURRENCY: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

pub fn contract(token_id: u64) -> ContractRef {
    ContractRef::new(
        address!("3cf279b3248E164F3e5C341826B878d350EC6AB1"),
        11155111,
        U256::from(token_id),
    )
}

pub fn item(name: &str) -> ItemMetadata {
    ItemMetadata {
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
        image: Some(format!("https://ipfs.io/ipfs/Qm{name}")),
    }
}

pub fn claim_condition(price_per_token: U256) -> ActiveClaimCondition {
    ActiveClaimCondition {
        price_per_token,
        currency: CURRENCY,
        start_timestamp: U256::from(1_700_000_000u64),
        max_claimable_supply: U256::from(100u64),
        supply_claimed: U256::from(12u64),
        quantity_limit_per_wallet: U256::from(5u64),
    }
}

pub fn ether() -> CurrencyMetadata {
    CurrencyMetadata {
        name: "Sepolia Ether".to_string(),
        symbol: "ETH".to_string(),
        decimals: 18,
    }
}
