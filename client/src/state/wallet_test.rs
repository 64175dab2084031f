use super::*;
use market::config::ARBITRUM_ONE_CHAIN_ID;

const ACCOUNT: Address = Address::repeat_byte(0xab);

#[test]
fn default_wallet_is_disconnected_on_sepolia() {
    let wallet = WalletState::default();
    assert!(!wallet.is_connected());
    assert_eq!(wallet.chain_id, ARBITRUM_SEPOLIA_CHAIN_ID);
    assert_eq!(wallet.button_label(), "Connect Wallet");
}

#[test]
fn connected_wallet_shows_short_address() {
    let mut wallet = WalletState { connecting: true, ..WalletState::default() };
    assert_eq!(wallet.button_label(), "Connecting...");

    wallet.connected(ACCOUNT, ARBITRUM_ONE_CHAIN_ID);
    assert!(!wallet.connecting);
    let label = wallet.button_label();
    assert!(label.starts_with("0x"));
    assert!(label.contains("..."));
    assert_eq!(label.len(), 10 + 3 + 6);
}

#[test]
fn network_follows_chain_id() {
    let mut wallet = WalletState::default();
    wallet.connected(ACCOUNT, ARBITRUM_ONE_CHAIN_ID);
    assert_eq!(wallet.network(&NetworkConfig::default()).name, "Arbitrum One");
    assert!(!wallet.wrong_network(&NetworkConfig::default()));
}

#[test]
fn unsupported_chain_is_flagged() {
    let mut wallet = WalletState::default();
    wallet.connected(ACCOUNT, 1);
    assert!(wallet.wrong_network(&NetworkConfig::default()));
    wallet.disconnect();
    assert!(!wallet.wrong_network(&NetworkConfig::default()));
}
