use alloy::primitives::{hex, U256};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::types::ItemMetadata;

pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Loads contract and token metadata documents referenced by on-chain URIs.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    http: reqwest::Client,
    gateway: String,
}

impl MetadataFetcher {
    pub fn new(http: reqwest::Client, gateway: &str) -> Self {
        let gateway = match gateway.ends_with('/') {
            true => gateway.to_string(),
            false => format!("{gateway}/"),
        };
        Self { http, gateway }
    }

    /// Rewrites `ipfs://` URIs onto the configured gateway; everything else is returned as is.
    pub fn resolve_uri(&self, uri: &str) -> String {
        match uri.strip_prefix("ipfs://") {
            Some(path) => format!("{}{}", self.gateway, path.trim_start_matches("ipfs/")),
            None => uri.to_string(),
        }
    }

    pub async fn fetch(&self, uri: &str) -> eyre::Result<ItemMetadata> {
        let mut metadata: ItemMetadata = match decode_data_uri(uri)? {
            Some(document) => serde_json::from_slice(&document)?,
            None => {
                let url = Url::parse(&self.resolve_uri(uri))?;
                tracing::debug!(url = url.as_str(), "Fetching metadata document");
                self.http
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?
            }
        };

        metadata.image = metadata.image.map(|image| self.resolve_uri(&image));
        Ok(metadata)
    }
}

/// Returns the payload of a `data:` URI, or `None` for any other scheme.
pub fn decode_data_uri(uri: &str) -> eyre::Result<Option<Vec<u8>>> {
    let Some(rest) = uri.strip_prefix("data:") else {
        return Ok(None);
    };

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| eyre::eyre!("Malformed data URI"))?;

    // payloads are percent-encoded, base64 ones included
    let payload: Vec<u8> = percent_decode_str(payload).collect();
    if header.ends_with(";base64") {
        Ok(Some(STANDARD.decode(payload)?))
    } else {
        Ok(Some(payload))
    }
}

/// Substitutes the ERC-1155 `{id}` placeholder with the zero padded hex token id.
pub fn token_uri_for_id(template: &str, token_id: U256) -> String {
    template.replace("{id}", &hex::encode(token_id.to_be_bytes::<32>()))
}
