//! Connected-wallet state.
//!
//! DESIGN
//! ======
//! Mirrors what the browser wallet last reported. The contract service reads
//! a snapshot of this state per action, so a stale snapshot can only cause a
//! wallet-side rejection, never a silent send from the wrong account.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use alloy_primitives::Address;
use market::config::{ARBITRUM_SEPOLIA_CHAIN_ID, Network, NetworkConfig};
use market::job::short_address;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletState {
    pub account: Option<Address>,
    pub chain_id: u64,
    /// `eth_requestAccounts` is in flight.
    pub connecting: bool,
}

impl Default for WalletState {
    fn default() -> Self {
        Self { account: None, chain_id: ARBITRUM_SEPOLIA_CHAIN_ID, connecting: false }
    }
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Record a successful connection.
    pub fn connected(&mut self, account: Address, chain_id: u64) {
        self.account = Some(account);
        self.chain_id = chain_id;
        self.connecting = false;
    }

    pub fn disconnect(&mut self) {
        self.account = None;
        self.connecting = false;
    }

    /// Checksummed account address, if connected.
    pub fn address(&self) -> Option<String> {
        self.account.map(|account| account.to_string())
    }

    /// Nav button label: the shortened address, or a connect prompt.
    pub fn button_label(&self) -> String {
        if self.connecting {
            return "Connecting...".to_owned();
        }
        match self.address() {
            Some(address) => short_address(&address),
            None => "Connect Wallet".to_owned(),
        }
    }

    pub fn network(&self, networks: &NetworkConfig) -> Network {
        networks.network(self.chain_id)
    }

    /// Wallet sits on a chain outside the supported table.
    pub fn wrong_network(&self, networks: &NetworkConfig) -> bool {
        self.is_connected() && self.network(networks).chain_id != self.chain_id
    }
}
