//! Supported networks and the contract address deployed on each.
//!
//! The contract is not deployed yet, so both addresses default to the zero
//! address. Deployments override them through [`NetworkConfig::with_overrides`]
//! (the host reads the overrides from the environment).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::borrow::Cow;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "ArbiFreelance";
pub const ARBITRUM_ONE_CHAIN_ID: u64 = 42161;
pub const ARBITRUM_SEPOLIA_CHAIN_ID: u64 = 421_614;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid contract address for {network}: {value}")]
    InvalidAddress { network: &'static str, value: String },
    #[error("unsupported chain id: {0}")]
    UnsupportedChain(u64),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// One supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: Cow<'static, str>,
    pub chain_id: u64,
    pub contract: Address,
    pub explorer_url: Cow<'static, str>,
}

impl Network {
    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.contract != Address::ZERO
    }

    #[must_use]
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{tx_hash}", self.explorer_url)
    }
}

/// Contract addresses per chain plus the chain used before a wallet reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub arbitrum: Address,
    pub arbitrum_sepolia: Address,
    pub default_chain_id: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { arbitrum: Address::ZERO, arbitrum_sepolia: Address::ZERO, default_chain_id: ARBITRUM_SEPOLIA_CHAIN_ID }
    }
}

impl NetworkConfig {
    /// Apply optional address and default-chain overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] for a malformed hex address and
    /// [`ConfigError::UnsupportedChain`] for a chain id outside the table.
    pub fn with_overrides(
        arbitrum: Option<&str>,
        arbitrum_sepolia: Option<&str>,
        default_chain_id: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = arbitrum {
            config.arbitrum = parse_address("arbitrum", raw)?;
        }
        if let Some(raw) = arbitrum_sepolia {
            config.arbitrum_sepolia = parse_address("arbitrum-sepolia", raw)?;
        }
        if let Some(chain_id) = default_chain_id {
            if config.network(chain_id).chain_id != chain_id {
                return Err(ConfigError::UnsupportedChain(chain_id));
            }
            config.default_chain_id = chain_id;
        }
        Ok(config)
    }

    /// Contract address for `chain_id`. Arbitrum One uses the mainnet
    /// deployment; every other chain falls back to Sepolia.
    #[must_use]
    pub fn contract_for(&self, chain_id: u64) -> Address {
        self.network(chain_id).contract
    }

    /// Network entry for `chain_id`, with the same Sepolia fallback.
    #[must_use]
    pub fn network(&self, chain_id: u64) -> Network {
        let [arbitrum, sepolia] = self.networks();
        if chain_id == ARBITRUM_ONE_CHAIN_ID { arbitrum } else { sepolia }
    }

    /// Network the wallet is on before it reports a chain.
    #[must_use]
    pub fn default_network(&self) -> Network {
        self.network(self.default_chain_id)
    }

    #[must_use]
    pub fn networks(&self) -> [Network; 2] {
        [
            Network {
                name: Cow::Borrowed("Arbitrum One"),
                chain_id: ARBITRUM_ONE_CHAIN_ID,
                contract: self.arbitrum,
                explorer_url: Cow::Borrowed("https://arbiscan.io"),
            },
            Network {
                name: Cow::Borrowed("Arbitrum Sepolia"),
                chain_id: ARBITRUM_SEPOLIA_CHAIN_ID,
                contract: self.arbitrum_sepolia,
                explorer_url: Cow::Borrowed("https://sepolia.arbiscan.io"),
            },
        ]
    }
}

fn parse_address(network: &'static str, raw: &str) -> Result<Address, ConfigError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|_| ConfigError::InvalidAddress { network, value: raw.to_owned() })
}

/// Body of the host's `GET /api/config`, fetched by the browser at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub app_name: String,
    pub default_chain_id: u64,
    pub networks: Vec<Network>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walletconnect_project_id: Option<String>,
}

impl PublicConfig {
    #[must_use]
    pub fn new(config: &NetworkConfig, walletconnect_project_id: Option<String>) -> Self {
        Self {
            app_name: APP_NAME.to_owned(),
            default_chain_id: config.default_chain_id,
            networks: config.networks().to_vec(),
            walletconnect_project_id,
        }
    }

    /// Rebuild the address table. Networks missing from the payload keep the
    /// zero placeholder.
    #[must_use]
    pub fn network_config(&self) -> NetworkConfig {
        let address = |chain_id: u64| {
            self.networks
                .iter()
                .find(|network| network.chain_id == chain_id)
                .map_or(Address::ZERO, |network| network.contract)
        };
        NetworkConfig {
            arbitrum: address(ARBITRUM_ONE_CHAIN_ID),
            arbitrum_sepolia: address(ARBITRUM_SEPOLIA_CHAIN_ID),
            default_chain_id: self.default_chain_id,
        }
    }
}
