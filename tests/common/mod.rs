pub mod factories;

pub mod mock_reader {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use alloy::primitives::{Address, U256};
    use async_trait::async_trait;
    use mintfront::chain::ChainReader;
    use mintfront::types::{ActiveClaimCondition, ContractRef, CurrencyMetadata, ItemMetadata};

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Probe {
        Supported,
        Unsupported,
        Fails,
    }

    impl Probe {
        fn answer(&self) -> eyre::Result<bool> {
            match self {
                Probe::Supported => Ok(true),
                Probe::Unsupported => Ok(false),
                Probe::Fails => Err(eyre::eyre!("execution reverted")),
            }
        }
    }

    /// In-memory chain. `None` for a lookup makes it fail.
    pub struct MockChainReader {
        pub multi_token: Probe,
        pub single_nonfungible: Probe,
        pub contract_metadata: Option<ItemMetadata>,
        pub token_metadata: Option<ItemMetadata>,
        pub claim_condition: Option<ActiveClaimCondition>,
        pub currency: Option<CurrencyMetadata>,
        pub delay: Option<Duration>,
        pub calls: AtomicUsize,
        pub claim_token_ids: std::sync::Mutex<Vec<Option<U256>>>,
    }

    impl MockChainReader {
        pub fn new(multi_token: Probe, single_nonfungible: Probe) -> Self {
            Self {
                multi_token,
                single_nonfungible,
                contract_metadata: None,
                token_metadata: None,
                claim_condition: None,
                currency: None,
                delay: None,
                calls: AtomicUsize::new(0),
                claim_token_ids: Default::default(),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn record_call(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
        }
    }

    fn or_fail<T: Clone>(value: &Option<T>, what: &str) -> eyre::Result<T> {
        value.clone().ok_or_else(|| eyre::eyre!("{} unavailable", what))
    }

    #[async_trait]
    impl ChainReader for MockChainReader {
        async fn is_multi_token(&self, _contract: &ContractRef) -> eyre::Result<bool> {
            self.record_call().await;
            self.multi_token.answer()
        }

        async fn is_single_nonfungible(&self, _contract: &ContractRef) -> eyre::Result<bool> {
            self.record_call().await;
            self.single_nonfungible.answer()
        }

        async fn contract_metadata(&self, _contract: &ContractRef) -> eyre::Result<ItemMetadata> {
            self.record_call().await;
            or_fail(&self.contract_metadata, "contract metadata")
        }

        async fn token_metadata(
            &self,
            _contract: &ContractRef,
            _token_id: U256,
        ) -> eyre::Result<ItemMetadata> {
            self.record_call().await;
            or_fail(&self.token_metadata, "token metadata")
        }

        async fn active_claim_condition(
            &self,
            _contract: &ContractRef,
            token_id: Option<U256>,
        ) -> eyre::Result<ActiveClaimCondition> {
            self.record_call().await;
            self.claim_token_ids.lock().unwrap().push(token_id);
            or_fail(&self.claim_condition, "claim condition")
        }

        async fn currency_metadata(
            &self,
            _chain_id: u64,
            _currency: Address,
        ) -> eyre::Result<CurrencyMetadata> {
            self.record_call().await;
            or_fail(&self.currency, "currency metadata")
        }
    }
}
