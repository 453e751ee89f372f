use std::sync::Arc;

use crate::api;
use crate::chain::RpcChainReader;
use crate::chain_list::connect;
use crate::config::Config;
use crate::metadata::MetadataFetcher;
use crate::storefront::Storefront;

/// Connects to the configured chain and builds the storefront service on top of it.
pub fn build_storefront(config: &Config) -> eyre::Result<Storefront> {
    let rpc_url = config.rpc_url()?;
    let provider = connect(&rpc_url, config.thirdweb_secret_key.as_deref())?;
    let fetcher = MetadataFetcher::new(reqwest::Client::new(), &config.ipfs_gateway);
    let reader = RpcChainReader::new(config.chain_id, provider, fetcher);

    Storefront::from_config(config, Arc::new(reader))
}

/// Starts the API and serves until ctrl-c.
pub async fn serve(config: &Config) -> eyre::Result<()> {
    let storefront = build_storefront(config)?;
    tracing::info!(
        address = storefront.contract().address.to_string(),
        chain_id = config.chain_id,
        "Starting storefront"
    );

    // warm the cache so the first page load does not pay for detection
    if let Err(err) = storefront.listing(false).await {
        tracing::warn!(error = err.to_string(), "Initial listing load failed");
    }

    api::start_api(config, storefront, api::router_with_defaults(config)).await?;
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    Ok(())
}
