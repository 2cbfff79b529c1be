/*
[INPUT]:  YAML configuration file and command-line overrides
[OUTPUT]: Parsed CLI configuration and the derived client configuration
[POS]:    Configuration layer - target host and network selection
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use dydx_v3_adapter::{API_HOST_MAINNET, ClientConfig, NETWORK_ID_MAINNET};
use serde::{Deserialize, Serialize};

/// Connection settings for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API host, scheme included
    #[serde(default = "default_host")]
    pub host: String,
    /// Ethereum network id the signatures are bound to
    #[serde(default = "default_network_id")]
    pub network_id: u64,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            network_id: default_network_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    API_HOST_MAINNET.to_string()
}

fn default_network_id() -> u64 {
    NETWORK_ID_MAINNET
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Flags given on the command line win over file values
    pub fn with_overrides(mut self, host: Option<String>, network_id: Option<u64>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(network_id) = network_id {
            self.network_id = network_id;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            network_id: self.network_id,
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}
