//! Host configuration from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Every variable is optional. A present but malformed value is a startup
//! error rather than a silent fallback, so a typo in a contract address
//! cannot point wallets at the zero address.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use market::config::{ConfigError, NetworkConfig, PublicConfig};

pub const DEFAULT_PORT: u16 = 3000;

const PORT: &str = "PORT";
const DEFAULT_CHAIN_ID: &str = "ARBI_DEFAULT_CHAIN_ID";
const CONTRACT_ARBITRUM: &str = "ARBI_CONTRACT_ARBITRUM";
const CONTRACT_ARBITRUM_SEPOLIA: &str = "ARBI_CONTRACT_ARBITRUM_SEPOLIA";
const WALLETCONNECT_PROJECT_ID: &str = "WALLETCONNECT_PROJECT_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub networks: NetworkConfig,
    pub walletconnect_project_id: Option<String>,
}

impl Config {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|value| value.trim().to_owned()).filter(|value| !value.is_empty());

        let port = match var(PORT) {
            Some(raw) => parse_number(PORT, &raw)?,
            None => DEFAULT_PORT,
        };
        let default_chain_id = var(DEFAULT_CHAIN_ID).map(|raw| parse_number(DEFAULT_CHAIN_ID, &raw)).transpose()?;
        let networks = NetworkConfig::with_overrides(
            var(CONTRACT_ARBITRUM).as_deref(),
            var(CONTRACT_ARBITRUM_SEPOLIA).as_deref(),
            default_chain_id,
        )?;

        Ok(Self { port, networks, walletconnect_project_id: var(WALLETCONNECT_PROJECT_ID) })
    }

    /// Configuration the browser fetches from `/api/config`.
    #[must_use]
    pub fn public(&self) -> PublicConfig {
        PublicConfig::new(&self.networks, self.walletconnect_project_id.clone())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidValue { key, value: raw.to_owned() })
}
