use crate::chain::ChainReader;
use crate::detect::detect_standard;
use crate::error::ResolveError;
use crate::types::{
    ActiveClaimCondition, ContractRef, DisplayRecord, ItemMetadata, TokenAmount, TokenStandard,
};

/// Outcome of resolving a contract: its standard, the display record, and the claim
/// condition the price came from (if one could be read).
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub standard: TokenStandard,
    pub record: DisplayRecord,
    pub claim: Option<ActiveClaimCondition>,
}

pub async fn resolve_display_record(
    reader: &dyn ChainReader,
    contract: &ContractRef,
) -> Result<DisplayRecord, ResolveError> {
    Ok(resolve(reader, contract).await?.record)
}

pub async fn resolve(
    reader: &dyn ChainReader,
    contract: &ContractRef,
) -> Result<Resolution, ResolveError> {
    let standard = detect_standard(reader, contract).await;
    normalize(reader, contract, standard).await
}

/// Fetches metadata and pricing for an already detected standard.
///
/// Only a failure to load the item's own metadata is fatal. A missing claim
/// condition or currency leaves the record without a price.
pub async fn normalize(
    reader: &dyn ChainReader,
    contract: &ContractRef,
    standard: TokenStandard,
) -> Result<Resolution, ResolveError> {
    let (metadata, claim) = match standard {
        TokenStandard::NonFungibleMulti { token_id } => tokio::join!(
            reader.token_metadata(contract, token_id),
            reader.active_claim_condition(contract, Some(token_id))
        ),
        TokenStandard::NonFungibleSingle | TokenStandard::Fungible => tokio::join!(
            reader.contract_metadata(contract),
            reader.active_claim_condition(contract, None)
        ),
    };

    let metadata = metadata.map_err(|err| ResolveError::CoreMetadata {
        standard,
        reason: format!("{err:#}"),
    })?;

    let claim = match claim {
        Ok(claim) => Some(claim),
        Err(err) => {
            tracing::warn!(
                standard = standard.to_string(),
                error = err.to_string(),
                "No active claim condition, price unavailable"
            );
            None
        }
    };

    let (price_per_unit, currency_symbol) = match &claim {
        Some(claim) => price_of(reader, contract, claim).await,
        None => (None, String::new()),
    };

    Ok(Resolution {
        standard,
        record: display_record(metadata, price_per_unit, currency_symbol),
        claim,
    })
}

async fn price_of(
    reader: &dyn ChainReader,
    contract: &ContractRef,
    claim: &ActiveClaimCondition,
) -> (Option<TokenAmount>, String) {
    match reader
        .currency_metadata(contract.chain_id, claim.currency)
        .await
    {
        Ok(currency) => (
            Some(TokenAmount::new(claim.price_per_token, currency.decimals)),
            currency.symbol,
        ),
        Err(err) => {
            tracing::warn!(
                currency = claim.currency.to_string(),
                error = err.to_string(),
                "Failed to fetch currency metadata, price unavailable"
            );
            (None, String::new())
        }
    }
}

fn display_record(
    metadata: ItemMetadata,
    price_per_unit: Option<TokenAmount>,
    currency_symbol: String,
) -> DisplayRecord {
    DisplayRecord {
        display_name: metadata.name.unwrap_or_default(),
        description: metadata.description.unwrap_or_default(),
        image_url: metadata.image.unwrap_or_default(),
        price_per_unit,
        currency_symbol,
    }
}
