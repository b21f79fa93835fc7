//! Client configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::SdkError;

/// HTTP basic authentication credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    /// User name
    pub username: String,
    /// Password
    pub password: String,
}

/// Connection settings for an [`EthClient`](crate::EthClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra HTTP headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Optional basic authentication
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
            basic_auth: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at the given endpoint, everything else defaulted
    pub fn with_url(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Default::default()
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, SdkError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String, SdkError> {
        toml::to_string_pretty(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<(), SdkError> {
        if self.rpc_url.trim().is_empty() {
            return Err(SdkError::Config("rpc_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(SdkError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
