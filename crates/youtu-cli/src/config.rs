/*
[INPUT]:  YAML configuration file and environment overrides
[OUTPUT]: Parsed client configuration and signing credential
[POS]:    Configuration layer - credential and host setup
[UPDATE]: When adding new configuration options
*/

use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use youtu_adapter::{ClientConfig, Credential, DEFAULT_HOST, DEFAULT_TIMEOUT};

/// Environment variable overriding `secret_id`
pub const SECRET_ID_ENV: &str = "YOUTU_SECRET_ID";
/// Environment variable overriding `secret_key`
pub const SECRET_KEY_ENV: &str = "YOUTU_SECRET_KEY";

/// Top-level configuration for the youtu CLI
#[derive(Clone, Deserialize)]
pub struct YoutuConfig {
    /// Application id issued by the service
    pub app_id: u32,
    pub secret_id: String,
    /// Secret key used to sign requests
    #[serde(default)]
    pub secret_key: String,
    /// Subject user id (at most 110 bytes)
    pub user_id: String,
    /// Signature expiry as unix timestamp; 0 = only valid at issuance
    #[serde(default)]
    pub expired: u32,
    #[serde(default = "default_host")]
    pub host: String,
    /// Request timeout in seconds, must be non-zero
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for YoutuConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutuConfig")
            .field("app_id", &self.app_id)
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("expired", &self.expired)
            .field("host", &self.host)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl YoutuConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Replace secrets with values from the environment when present
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(secret_id) = lookup(SECRET_ID_ENV).filter(|v| !v.is_empty()) {
            self.secret_id = secret_id;
        }
        if let Some(secret_key) = lookup(SECRET_KEY_ENV).filter(|v| !v.is_empty()) {
            self.secret_key = secret_key;
        }
    }

    /// Build the signing credential
    pub fn credential(&self) -> anyhow::Result<Credential> {
        anyhow::ensure!(
            !self.secret_key.is_empty(),
            "secret_key is empty; set it in the config file or via {SECRET_KEY_ENV}"
        );
        Credential::new(
            self.app_id,
            self.secret_id.clone(),
            self.secret_key.clone(),
            self.expired,
            self.user_id.clone(),
        )
        .context("build credential")
    }

    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be greater than 0");
        Ok(ClientConfig {
            host: self.host.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}
