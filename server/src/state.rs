//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for the API proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum; fields are Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client honoring the proxy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
