//! Configuration file loading.
//!
//! Values are layered: built-in defaults, then the TOML file, then
//! `BINDCTL_HTTP_*` environment variables and command-line flags (clap
//! reads both into [`HttpArgs`]).

use std::path::{Path, PathBuf};
use std::time::Duration;

use bindctl_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::cli::HttpArgs;
use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindctlConfig {
    /// Connection to the agent's HTTP API
    pub http: HttpSettings,
}

/// `[http]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Base URL of the HTTP API
    pub address: String,
    /// ACL token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            address: bindctl_client::config::DEFAULT_ADDRESS.to_string(),
            token: None,
            timeout_secs: bindctl_client::config::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl BindctlConfig {
    /// `<platform config dir>/bindctl/config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bindctl").join("config.toml"))
    }

    /// Picks the config file: explicit path first, then the default location.
    ///
    /// `--config` already absorbs `BINDCTL_CONFIG` through clap.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    ///
    /// An explicitly named file must exist. A missing file at the default
    /// location yields the defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "config file not found at {}",
                path.display()
            ))),
            _ => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies flag and environment values on top of the file values.
    pub fn with_overrides(mut self, http: &HttpArgs) -> Self {
        if let Some(address) = http.http_addr.as_deref().filter(|a| !a.is_empty()) {
            self.http.address = address.to_string();
        }
        if let Some(token) = &http.token {
            self.http.token = Some(token.clone());
        }
        self
    }

    /// Connection settings for the HTTP store.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.http.address.clone())
            .with_timeout(Duration::from_secs(self.http.timeout_secs));
        if let Some(token) = &self.http.token {
            config = config.with_token(token.clone());
        }
        config
    }
}
