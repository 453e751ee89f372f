use alloy::primitives::{Address, Bytes, FixedBytes, TxKind, U256};
use alloy::providers::Provider;
use alloy::rpc::types::eth::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chain_list::{ChainProvider, CHAINS};
use crate::contracts::{
    IContractMetadata, IDrop, IDrop1155, IERC1155MetadataURI, IERC165, IERC20Metadata,
    ERC1155_INTERFACE_ID, ERC721_INTERFACE_ID, NATIVE_TOKEN_ADDRESS,
};
use crate::metadata::{token_uri_for_id, MetadataFetcher};
use crate::types::{ActiveClaimCondition, ContractRef, CurrencyMetadata, ItemMetadata};

/// Read-only view of a drop contract and the chain it lives on.
///
/// Every lookup the storefront performs goes through this trait, so detection and
/// normalization can run against an in-memory implementation in tests.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn is_multi_token(&self, contract: &ContractRef) -> eyre::Result<bool>;

    async fn is_single_nonfungible(&self, contract: &ContractRef) -> eyre::Result<bool>;

    async fn contract_metadata(&self, contract: &ContractRef) -> eyre::Result<ItemMetadata>;

    async fn token_metadata(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> eyre::Result<ItemMetadata>;

    /// Claim condition for the whole contract, or for one token when `token_id` is given.
    async fn active_claim_condition(
        &self,
        contract: &ContractRef,
        token_id: Option<U256>,
    ) -> eyre::Result<ActiveClaimCondition>;

    async fn currency_metadata(
        &self,
        chain_id: u64,
        currency: Address,
    ) -> eyre::Result<CurrencyMetadata>;
}

/// Helper function for calling view functions for SolCall types
pub async fn view_contract_call<T>(
    call: T,
    provider: &ChainProvider,
    address: Address,
) -> eyre::Result<T::Return>
where
    T: SolCall,
{
    provider
        .call(&TransactionRequest {
            to: Some(TxKind::Call(address)),
            input: TransactionInput::new(Bytes::from(call.abi_encode())),
            ..Default::default()
        })
        .await
        .map_err(|err| eyre::eyre!("Error calling contract: {:?}", err))
        .and_then(|response| {
            T::abi_decode_returns(&response, true)
                .map_err(|err| eyre::eyre!("Error decoding contract response: {:?}", err))
        })
}

/// `ChainReader` backed by JSON-RPC view calls on a single chain.
pub struct RpcChainReader {
    chain_id: u64,
    provider: ChainProvider,
    fetcher: MetadataFetcher,
}

impl RpcChainReader {
    pub fn new(chain_id: u64, provider: ChainProvider, fetcher: MetadataFetcher) -> Self {
        Self {
            chain_id,
            provider,
            fetcher,
        }
    }

    fn ensure_chain(&self, chain_id: u64) -> eyre::Result<()> {
        match chain_id == self.chain_id {
            true => Ok(()),
            false => Err(eyre::eyre!(
                "Reader is connected to chain {} but chain {} was requested",
                self.chain_id,
                chain_id
            )),
        }
    }

    async fn supports_interface(
        &self,
        contract: &ContractRef,
        interface_id: FixedBytes<4>,
    ) -> eyre::Result<bool> {
        self.ensure_chain(contract.chain_id)?;
        let call = IERC165::supportsInterfaceCall {
            interfaceId: interface_id,
        };
        let result = view_contract_call(call, &self.provider, contract.address).await?;
        Ok(result._0)
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn is_multi_token(&self, contract: &ContractRef) -> eyre::Result<bool> {
        self.supports_interface(contract, ERC1155_INTERFACE_ID).await
    }

    async fn is_single_nonfungible(&self, contract: &ContractRef) -> eyre::Result<bool> {
        self.supports_interface(contract, ERC721_INTERFACE_ID).await
    }

    async fn contract_metadata(&self, contract: &ContractRef) -> eyre::Result<ItemMetadata> {
        self.ensure_chain(contract.chain_id)?;
        let uri = view_contract_call(
            IContractMetadata::contractURICall {},
            &self.provider,
            contract.address,
        )
        .await;

        match uri {
            Ok(uri) if !uri._0.is_empty() => self.fetcher.fetch(&uri._0).await,
            Ok(_) | Err(_) => {
                // contracts without a contract URI still expose a name
                tracing::debug!(
                    address = contract.address.to_string(),
                    "No contract URI, falling back to name()"
                );
                let name =
                    view_contract_call(IERC20Metadata::nameCall {}, &self.provider, contract.address)
                        .await?;
                Ok(ItemMetadata {
                    name: Some(name._0),
                    ..Default::default()
                })
            }
        }
    }

    async fn token_metadata(
        &self,
        contract: &ContractRef,
        token_id: U256,
    ) -> eyre::Result<ItemMetadata> {
        self.ensure_chain(contract.chain_id)?;
        let uri = view_contract_call(
            IERC1155MetadataURI::uriCall { id: token_id },
            &self.provider,
            contract.address,
        )
        .await?;

        self.fetcher.fetch(&token_uri_for_id(&uri._0, token_id)).await
    }

    async fn active_claim_condition(
        &self,
        contract: &ContractRef,
        token_id: Option<U256>,
    ) -> eyre::Result<ActiveClaimCondition> {
        self.ensure_chain(contract.chain_id)?;
        let condition: ActiveClaimCondition = match token_id {
            Some(token_id) => {
                let condition_id = view_contract_call(
                    IDrop1155::getActiveClaimConditionIdCall { _tokenId: token_id },
                    &self.provider,
                    contract.address,
                )
                .await?
                ._0;

                view_contract_call(
                    IDrop1155::getClaimConditionByIdCall {
                        _tokenId: token_id,
                        _conditionId: condition_id,
                    },
                    &self.provider,
                    contract.address,
                )
                .await?
                .condition
                .into()
            }
            None => {
                let condition_id = view_contract_call(
                    IDrop::getActiveClaimConditionIdCall {},
                    &self.provider,
                    contract.address,
                )
                .await?
                ._0;

                view_contract_call(
                    IDrop::getClaimConditionByIdCall {
                        _conditionId: condition_id,
                    },
                    &self.provider,
                    contract.address,
                )
                .await?
                .condition
                .into()
            }
        };

        Ok(condition)
    }

    async fn currency_metadata(
        &self,
        chain_id: u64,
        currency: Address,
    ) -> eyre::Result<CurrencyMetadata> {
        if currency == NATIVE_TOKEN_ADDRESS {
            return Ok(CHAINS.native_currency(chain_id));
        }
        self.ensure_chain(chain_id)?;

        let (name, symbol, decimals) = tokio::try_join!(
            view_contract_call(IERC20Metadata::nameCall {}, &self.provider, currency),
            view_contract_call(IERC20Metadata::symbolCall {}, &self.provider, currency),
            view_contract_call(IERC20Metadata::decimalsCall {}, &self.provider, currency),
        )?;

        Ok(CurrencyMetadata {
            name: name._0,
            symbol: symbol._0,
            decimals: decimals._0,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chain_list::connect;
    use alloy::primitives::address;

    fn reader() -> RpcChainReader {
        // never dialed: every test below resolves before touching the network
        let provider = connect("http://127.0.0.1:1", None).unwrap();
        let fetcher = MetadataFetcher::new(reqwest::Client::new(), "https://ipfs.io/ipfs/");
        RpcChainReader::new(11155111, provider, fetcher)
    }

    #[tokio::test]
    async fn test_native_currency_skips_rpc() {
        let currency = reader()
            .currency_metadata(137, NATIVE_TOKEN_ADDRESS)
            .await
            .unwrap();
        assert_eq!(currency.symbol, "POL");
        assert_eq!(currency.decimals, 18);
    }

    #[tokio::test]
    async fn test_rejects_other_chains() {
        let contract = ContractRef::new(
            address!("3cf279b3248E164F3e5C341826B878d350EC6AB1"),
            1,
            U256::ZERO,
        );
        let err = reader().is_multi_token(&contract).await.unwrap_err();
        assert!(err.to_string().contains("chain 1 was requested"));
    }
}
