//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no marketplace data; it only serves the configuration the
//! browser needs before talking to the wallet, built once at startup.

use std::sync::Arc;

use market::config::PublicConfig;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub public: Arc<PublicConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { public: Arc::new(config.public()) }
    }
}
