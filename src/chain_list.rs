use alloy::providers::RootProvider;
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::CurrencyMetadata;

const CHAINS_JSON: &str = include_str!("../data/chains.json");

pub type ChainProvider = RootProvider<Http<reqwest::Client>>;

pub struct Chains(Vec<Chain>);

pub static CHAINS: Lazy<Chains> = Lazy::new(Chains::new);
pub static VARIABLE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{(.+?)}").unwrap());

impl Chains {
    fn new() -> Self {
        Chains(serde_json::from_str::<Vec<Chain>>(CHAINS_JSON).unwrap())
    }

    pub fn get_chain_by_id(&self, chain_id: u64) -> Option<Chain> {
        self.0.iter().find(|chain| chain.chain_id == chain_id).cloned()
    }

    /// Native currency of a chain, falling back to ether for chains missing from the list.
    pub fn native_currency(&self, chain_id: u64) -> CurrencyMetadata {
        match self.get_chain_by_id(chain_id) {
            Some(chain) => chain.native_currency.into(),
            None => NativeCurrency::default().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub name: String,
    pub chain: String,
    pub rpc: Vec<String>,
    pub native_currency: NativeCurrency,
    #[serde(rename = "infoURL")]
    pub info_url: String,
    pub short_name: String,
    pub chain_id: u64,
    pub network_id: u64,
    pub title: Option<String>,
    #[serde(default)]
    pub explorers: Vec<Explorer>,
}

impl Chain {
    /// First public HTTP endpoint that needs no API key substitution.
    pub fn public_http_rpc(&self) -> Option<String> {
        self.rpc
            .iter()
            .find(|rpc| rpc.starts_with("http") && !VARIABLE_REGEX.is_match(rpc))
            .cloned()
    }
}

/// Builds an HTTP JSON-RPC provider, attaching the thirdweb secret key header when present.
pub fn connect(url: &str, secret_key: Option<&str>) -> eyre::Result<ChainProvider> {
    if VARIABLE_REGEX.is_match(url) {
        return Err(eyre::eyre!("URL contains variables"));
    }
    let url = Url::parse(url)?;

    let mut headers = HeaderMap::new();
    if let Some(secret_key) = secret_key {
        headers.insert("x-secret-key", HeaderValue::from_str(secret_key)?);
    }
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    tracing::info!(rpc = url.host_str().unwrap_or_default(), "Connecting to chain");
    let transport = Http::with_client(client, url);
    Ok(RootProvider::new(RpcClient::new(transport, false)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

impl From<NativeCurrency> for CurrencyMetadata {
    fn from(currency: NativeCurrency) -> Self {
        Self {
            name: currency.name,
            symbol: currency.symbol,
            decimals: currency.decimals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explorer {
    pub name: String,
    pub url: String,
    pub standard: String,
}
