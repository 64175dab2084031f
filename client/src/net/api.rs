//! HTTP calls to the host.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the page already
//! renders with built-in defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use market::config::PublicConfig;

pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn config_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Parse the `/api/config` body.
///
/// # Errors
///
/// Returns the JSON error text when the body does not match [`PublicConfig`].
pub fn decode_config(body: &str) -> Result<PublicConfig, String> {
    serde_json::from_str(body).map_err(|e| format!("invalid config payload: {e}"))
}

/// Fetch network configuration from `GET /api/config`.
///
/// # Errors
///
/// Returns a message for transport failures, non-2xx statuses, and
/// malformed payloads.
pub async fn fetch_config() -> Result<PublicConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        decode_config(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
