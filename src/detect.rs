use crate::chain::ChainReader;
use crate::types::{ContractRef, TokenStandard};

/// Works out which token standard a contract implements.
///
/// Both interface probes run concurrently. A probe that errors counts as "not
/// implemented", so this never fails: a contract that answers neither probe is
/// treated as fungible.
pub async fn detect_standard(reader: &dyn ChainReader, contract: &ContractRef) -> TokenStandard {
    let (is_multi_token, is_single_nonfungible) = tokio::join!(
        reader.is_multi_token(contract),
        reader.is_single_nonfungible(contract)
    );

    let standard = TokenStandard::from_probes(
        probe_or_false("erc1155", is_multi_token),
        probe_or_false("erc721", is_single_nonfungible),
        contract.token_id,
    );
    tracing::debug!(
        address = contract.address.to_string(),
        standard = standard.to_string(),
        "Detected token standard"
    );
    standard
}

fn probe_or_false(probe: &'static str, result: eyre::Result<bool>) -> bool {
    match result {
        Ok(supported) => supported,
        Err(err) => {
            tracing::warn!(probe, error = err.to_string(), "Interface probe failed");
            false
        }
    }
}
