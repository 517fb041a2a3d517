//! Client configuration
//!
//! Immutable after [`Client::start`](crate::Client::start). The API key is
//! optional: without one the client runs in anonymous mode (list reads only,
//! no token-renewal task). `base_url` is overridable so tests can point the
//! client at a local mock server.

use std::time::Duration;

use fishfish_auth::ApiKey;

use crate::error::{Error, Result};

/// Target API version, baked into the default base URL.
pub const API_VERSION: u32 = 1;

/// Base URL of the public FishFish API for [`API_VERSION`].
pub fn default_base_url() -> String {
    format!("https://api.fishfish.gg/v{API_VERSION}/")
}

/// Client configuration.
#[derive(Debug)]
pub struct Config {
    /// API base URL, including the version segment and trailing slash.
    pub base_url: String,
    /// Long-lived API key; `None` runs the client anonymously.
    pub api_key: Option<ApiKey>,
    /// Permission set requested for issued session tokens.
    pub permissions: Vec<String>,
    /// Cadence of the domain-list sync task.
    pub sync_interval: Duration,
    /// Cadence of the session-token renewal task.
    pub token_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            permissions: Vec::new(),
            sync_interval: Duration::from_millis(5000),
            token_interval: Duration::from_secs(3600),
        }
    }
}

impl Config {
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.sync_interval.is_zero() {
            return Err(Error::Config("sync_interval must be greater than 0".into()));
        }

        if self.token_interval.is_zero() {
            return Err(Error::Config(
                "token_interval must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
