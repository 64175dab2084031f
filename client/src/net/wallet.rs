//! EIP-1193 wallet bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Injected wallets expose `window.ethereum.request({ method, params })`,
//! which returns a promise of JSON. [`BrowserWallet`] implements
//! `market::contract::ChainClient` on top of it, so `ContractService` stays
//! browser-agnostic. Encoding of request params and decoding of hex results
//! are plain functions, tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Provider errors carry an EIP-1193 `code`; 4001 (user rejected) becomes
//! `ChainError::Rejected`, everything else `ChainError::Rpc`. A missing
//! provider is `ChainError::NoProvider`, and on the server every request
//! fails that way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use alloy_primitives::{Address, B256, Bytes, hex};
use async_trait::async_trait;
use leptos::prelude::*;
use market::config::NetworkConfig;
use market::contract::{CallRequest, ChainClient, ChainError, ContractService, TxRequest};
use serde_json::{Value, json};

use crate::state::toasts::{ToastNotifier, ToastState};
use crate::state::wallet::WalletState;

/// EIP-1193 "user rejected the request".
pub const USER_REJECTED: i64 = 4001;

/// Contract service wired to the browser wallet and the toast stack.
pub type MarketContract = ContractService<BrowserWallet, ToastNotifier>;

/// Build a service over a snapshot of the current wallet state.
pub fn contract_service(wallet: &WalletState, toasts: RwSignal<ToastState>, networks: NetworkConfig) -> MarketContract {
    ContractService::new(BrowserWallet::new(wallet), ToastNotifier::new(toasts), networks)
}

// =============================================================================
// CHAIN CLIENT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserWallet {
    account: Option<Address>,
    chain_id: u64,
}

impl BrowserWallet {
    pub fn new(wallet: &WalletState) -> Self {
        Self { account: wallet.account, chain_id: wallet.chain_id }
    }
}

#[async_trait(?Send)]
impl ChainClient for BrowserWallet {
    fn account(&self) -> Option<Address> {
        self.account
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn send_transaction(&self, tx: TxRequest) -> Result<B256, ChainError> {
        let result = request("eth_sendTransaction", send_transaction_params(&tx)).await?;
        parse_hash(expect_str(&result)?)
    }

    async fn call(&self, request_body: CallRequest) -> Result<Bytes, ChainError> {
        let result = request("eth_call", call_params(&request_body)).await?;
        parse_bytes(expect_str(&result)?)
    }
}

/// Prompt the wallet for account access.
///
/// # Errors
///
/// Propagates provider failures, including the user declining.
pub async fn connect() -> Result<(Address, u64), ChainError> {
    let accounts = request("eth_requestAccounts", json!([])).await?;
    let account = first_account(&accounts)?.ok_or_else(|| ChainError::Malformed("wallet returned no accounts".to_owned()))?;
    Ok((account, chain_id().await?))
}

/// Already-authorized account, without prompting.
///
/// # Errors
///
/// Propagates provider failures.
pub async fn restore() -> Result<Option<(Address, u64)>, ChainError> {
    let accounts = request("eth_accounts", json!([])).await?;
    match first_account(&accounts)? {
        Some(account) => Ok(Some((account, chain_id().await?))),
        None => Ok(None),
    }
}

async fn chain_id() -> Result<u64, ChainError> {
    let result = request("eth_chainId", json!([])).await?;
    parse_quantity(expect_str(&result)?)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Params for `eth_sendTransaction`.
pub fn send_transaction_params(tx: &TxRequest) -> Value {
    json!([{
        "from": tx.from.to_string(),
        "to": tx.to.to_string(),
        "value": format!("0x{:x}", tx.value),
        "data": hex::encode_prefixed(&tx.data),
        "chainId": format!("0x{:x}", tx.chain_id),
    }])
}

/// Params for `eth_call` against the latest block.
pub fn call_params(call: &CallRequest) -> Value {
    json!([{ "to": call.to.to_string(), "data": hex::encode_prefixed(&call.data) }, "latest"])
}

/// Map an EIP-1193 error code to a [`ChainError`].
pub fn rpc_error(code: i64, message: String) -> ChainError {
    if code == USER_REJECTED { ChainError::Rejected(message) } else { ChainError::Rpc { code, message } }
}

// =============================================================================
// DECODING
// =============================================================================

/// Hex quantity such as `"0xa4b1"`.
///
/// # Errors
///
/// [`ChainError::Malformed`] for missing prefix or non-hex digits.
pub fn parse_quantity(raw: &str) -> Result<u64, ChainError> {
    let digits = raw.strip_prefix("0x").ok_or_else(|| malformed("quantity", raw))?;
    u64::from_str_radix(digits, 16).map_err(|_| malformed("quantity", raw))
}

/// # Errors
///
/// [`ChainError::Malformed`] unless `raw` is a 20-byte hex address.
pub fn parse_account(raw: &str) -> Result<Address, ChainError> {
    raw.parse::<Address>().map_err(|_| malformed("address", raw))
}

/// # Errors
///
/// [`ChainError::Malformed`] unless `raw` is a 32-byte hex hash.
pub fn parse_hash(raw: &str) -> Result<B256, ChainError> {
    raw.parse::<B256>().map_err(|_| malformed("transaction hash", raw))
}

/// # Errors
///
/// [`ChainError::Malformed`] for invalid hex.
pub fn parse_bytes(raw: &str) -> Result<Bytes, ChainError> {
    hex::decode(raw).map(Bytes::from).map_err(|_| malformed("call result", raw))
}

fn first_account(accounts: &Value) -> Result<Option<Address>, ChainError> {
    let list = accounts.as_array().ok_or_else(|| malformed("account list", &accounts.to_string()))?;
    list.first().map(|value| expect_str(value).and_then(parse_account)).transpose()
}

fn expect_str(value: &Value) -> Result<&str, ChainError> {
    value.as_str().ok_or_else(|| malformed("string result", &value.to_string()))
}

fn malformed(what: &str, raw: &str) -> ChainError {
    ChainError::Malformed(format!("{what}: {raw}"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// One `window.ethereum.request` round trip.
async fn request(method: &str, params: Value) -> Result<Value, ChainError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(ChainError::NoProvider)?;
        let provider = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).map_err(|_| ChainError::NoProvider)?;
        if provider.is_undefined() || provider.is_null() {
            return Err(ChainError::NoProvider);
        }
        let request_fn: js_sys::Function = js_sys::Reflect::get(&provider, &JsValue::from_str("request"))
            .map_err(|_| ChainError::NoProvider)?
            .dyn_into()
            .map_err(|_| ChainError::NoProvider)?;

        let payload = json!({ "method": method, "params": params }).to_string();
        let arg = js_sys::JSON::parse(&payload).map_err(provider_error)?;
        let promise: js_sys::Promise = request_fn
            .call1(&provider, &arg)
            .map_err(provider_error)?
            .dyn_into()
            .map_err(|_| ChainError::Malformed(format!("{method} did not return a promise")))?;
        let result = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(provider_error)?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }

        let text: String = js_sys::JSON::stringify(&result).map_err(provider_error)?.into();
        log::debug!("wallet {method} ok");
        serde_json::from_str(&text).map_err(|e| ChainError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, params);
        Err(ChainError::NoProvider)
    }
}

#[cfg(feature = "hydrate")]
fn provider_error(err: wasm_bindgen::JsValue) -> ChainError {
    use wasm_bindgen::JsValue;

    let field = |name: &str| js_sys::Reflect::get(&err, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
    let message = field("message").as_string().unwrap_or_else(|| format!("{err:?}"));
    match field("code").as_f64() {
        #[allow(clippy::cast_possible_truncation)]
        Some(code) => rpc_error(code as i64, message),
        None => ChainError::Malformed(message),
    }
}
