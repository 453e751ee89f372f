use std::env;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use envconfig::Envconfig;

use crate::chain_list::CHAINS;
use crate::quantity::QuantityBounds;
use crate::types::ContractRef;

#[derive(Envconfig, Debug, Clone)]
pub struct Config {
    // drop contract the storefront sells from
    #[envconfig(from = "CONTRACT_ADDRESS", default = "0x3cf279b3248E164F3e5C341826B878d350EC6AB1")]
    pub contract_address: String,

    #[envconfig(from = "CHAIN_ID", default = "11155111")]
    pub chain_id: u64,

    // only used for ERC-1155 drops
    #[envconfig(from = "TOKEN_ID", default = "0")]
    pub token_id: String,

    #[envconfig(from = "THIRDWEB_CLIENT_ID")]
    pub thirdweb_client_id: Option<String>,

    #[envconfig(from = "THIRDWEB_SECRET_KEY")]
    pub thirdweb_secret_key: Option<String>,

    #[envconfig(from = "IPFS_GATEWAY", default = "https://ipfs.io/ipfs/")]
    pub ipfs_gateway: String,

    #[envconfig(from = "API_PORT", default = "7777")]
    pub api_port: u64,

    #[envconfig(from = "CONNECT_EXTERNAL", default = "false")]
    pub connect_external: bool,

    #[envconfig(from = "MAX_CLAIM_QUANTITY")]
    pub max_claim_quantity: Option<u32>,

    #[envconfig(from = "CACHE_TTL_SECS", default = "360")]
    pub cache_ttl_secs: u64,

    #[envconfig(from = "REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,

    #[envconfig(from = "INTERACTIVE", default = "false")]
    pub interactive: bool,
}

impl Config {
    pub fn test_default() -> Self {
        Config {
            contract_address: "0x3cf279b3248E164F3e5C341826B878d350EC6AB1".to_string(),
            chain_id: 11155111,
            token_id: "0".to_string(),
            thirdweb_client_id: None,
            thirdweb_secret_key: None,
            ipfs_gateway: "https://ipfs.io/ipfs/".to_string(),
            api_port: 0,
            connect_external: false,
            max_claim_quantity: Some(10),
            cache_ttl_secs: 360,
            request_timeout_secs: 5,
            interactive: true,
        }
    }
}

impl Config {
    pub fn initial_network_ip(&self) -> String {
        if self.connect_external {
            "0.0.0.0".to_string()
        } else {
            "127.0.0.1".to_string()
        }
    }

    pub fn contract(&self) -> eyre::Result<ContractRef> {
        let address = Address::from_str(&self.contract_address)
            .map_err(|err| eyre::eyre!("Invalid CONTRACT_ADDRESS {}: {}", self.contract_address, err))?;
        let token_id = U256::from_str(&self.token_id)
            .map_err(|err| eyre::eyre!("Invalid TOKEN_ID {}: {}", self.token_id, err))?;

        Ok(ContractRef::new(address, self.chain_id, token_id))
    }

    pub fn quantity_bounds(&self) -> QuantityBounds {
        QuantityBounds::new(self.max_claim_quantity)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    // Dynamic configuration: RPC urls take the form of CHAIN_<chain_id>_RPC
    // If not provided, the thirdweb RPC edge or a public node from the chain list is used
    pub fn rpc_url(&self) -> eyre::Result<String> {
        if let Ok(url) = env::var(format!("CHAIN_{}_RPC", self.chain_id)) {
            return Ok(url);
        }

        match (&self.thirdweb_client_id, &self.thirdweb_secret_key) {
            (Some(client_id), _) => Ok(format!(
                "https://{}.rpc.thirdweb.com/{}",
                self.chain_id, client_id
            )),
            (None, Some(_)) => Ok(format!("https://{}.rpc.thirdweb.com", self.chain_id)),
            (None, None) => CHAINS
                .get_chain_by_id(self.chain_id)
                .and_then(|chain| chain.public_http_rpc())
                .ok_or_else(|| {
                    eyre::eyre!(
                        "No default RPC URL for chain {}. Set CHAIN_{}_RPC",
                        self.chain_id,
                        self.chain_id
                    )
                }),
        }
    }

    pub fn validate(self) -> eyre::Result<Self> {
        self.contract()?;
        if CHAINS.get_chain_by_id(self.chain_id).is_none() {
            return Err(eyre::eyre!("Chain ID {} is not supported", self.chain_id));
        }
        Ok(self)
    }
}

pub fn init() -> eyre::Result<Config> {
    Config::init_from_env()
        .map_err(|err| eyre::eyre!("Failed to load config: {}", err))?
        .validate()
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_contract() {
        let mut config = Config::test_default();
        config.token_id = "1".to_string();

        let contract = config.contract().unwrap();
        assert_eq!(contract.chain_id, 11155111);
        assert_eq!(contract.token_id, U256::from(1));
        assert_eq!(
            contract.address,
            address!("3cf279b3248E164F3e5C341826B878d350EC6AB1")
        );
    }

    #[test]
    fn test_validate() {
        assert!(Config::test_default().validate().is_ok());

        let mut config = Config::test_default();
        config.contract_address = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::test_default();
        config.token_id = "-1".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::test_default();
        config.chain_id = 424242;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_rpc_url() {
        // chain ids without CHAIN_<id>_RPC overrides in the test environment
        let mut config = Config::test_default();
        config.chain_id = 84532;
        assert_eq!(config.rpc_url().unwrap(), "https://sepolia.base.org");

        config.thirdweb_secret_key = Some("secret".to_string());
        assert_eq!(config.rpc_url().unwrap(), "https://84532.rpc.thirdweb.com");

        config.thirdweb_client_id = Some("abc123".to_string());
        assert_eq!(
            config.rpc_url().unwrap(),
            "https://84532.rpc.thirdweb.com/abc123"
        );

        let mut config = Config::test_default();
        config.chain_id = 424242;
        assert!(config.rpc_url().is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        let mut config = Config::test_default();
        assert_eq!(config.quantity_bounds().max(), Some(10));

        config.max_claim_quantity = None;
        assert_eq!(config.quantity_bounds().max(), None);
    }
}
