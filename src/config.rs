//! Client configuration, optionally loaded from a YAML file.
//!
//! ```yaml
//! api_key: 0123456789abcdef
//! base_url: https://newsapi.org   # optional
//! timeout_secs: 10                # optional
//! user_agent: my-reader/1.0       # optional
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Settings for building a [`NewsApiClient`](crate::NewsApiClient).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        let config: ClientConfig = serde_yaml::from_str(&text)?;
        debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "Loaded client config");
        Ok(config)
    }

    /// Build a `reqwest::Client` honouring the timeout and user agent.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        Ok(builder.build()?)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
