use std::sync::Arc;
use std::time::Duration;

use mini_moka::sync::Cache;

use crate::chain::ChainReader;
use crate::config::Config;
use crate::error::ResolveError;
use crate::normalize::resolve;
use crate::quantity::{QuantityBounds, Quote};
use crate::types::{ClaimSupply, ContractRef, Listing};

/// Serves the listing for one configured contract.
///
/// Resolved listings are kept for `cache_ttl`; failures are never cached so the page can
/// retry right away. Every load is bounded by `timeout`.
#[derive(Clone)]
pub struct Storefront {
    reader: Arc<dyn ChainReader>,
    contract: ContractRef,
    bounds: QuantityBounds,
    cache: Cache<ContractRef, Listing>,
    timeout: Duration,
}

impl Storefront {
    pub fn new(
        reader: Arc<dyn ChainReader>,
        contract: ContractRef,
        bounds: QuantityBounds,
        cache_ttl: Duration,
        timeout: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(cache_ttl)
            .build();

        Self {
            reader,
            contract,
            bounds,
            cache,
            timeout,
        }
    }

    pub fn from_config(config: &Config, reader: Arc<dyn ChainReader>) -> eyre::Result<Self> {
        Ok(Self::new(
            reader,
            config.contract()?,
            config.quantity_bounds(),
            config.cache_ttl(),
            config.request_timeout(),
        ))
    }

    pub fn contract(&self) -> &ContractRef {
        &self.contract
    }

    /// Returns the cached listing, or resolves it when missing, stale, or `refresh` is set.
    pub async fn listing(&self, refresh: bool) -> Result<Listing, ResolveError> {
        if !refresh {
            if let Some(listing) = self.cache.get(&self.contract) {
                tracing::debug!("Serving cached listing");
                return Ok(listing);
            }
        }

        let resolution = tokio::time::timeout(
            self.timeout,
            resolve(self.reader.as_ref(), &self.contract),
        )
        .await
        .map_err(|_| ResolveError::Timeout(self.timeout))??;

        let listing = Listing {
            contract: self.contract.clone(),
            standard: resolution.standard,
            supply: resolution.claim.as_ref().map(ClaimSupply::from),
            record: resolution.record,
            quantity: self.bounds,
        };

        tracing::info!(
            standard = listing.standard.to_string(),
            name = listing.record.display_name.as_str(),
            price = listing
                .record
                .price_per_unit
                .map(|price| price.to_string())
                .unwrap_or_default(),
            "Resolved listing"
        );
        self.cache.insert(self.contract.clone(), listing.clone());
        Ok(listing)
    }

    pub async fn quote(&self, quantity: i64) -> Result<Quote, ResolveError> {
        let listing = self.listing(false).await?;
        Ok(Quote::new(&listing, quantity))
    }
}
