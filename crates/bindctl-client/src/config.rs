//! Client configuration.

use std::time::Duration;

/// Default address of the local agent's HTTP API.
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8500";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`HttpRuleStore`](crate::HttpRuleStore).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the HTTP API, e.g. `http://127.0.0.1:8500`
    pub address: String,
    /// ACL token sent with every request
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for `address` with no token.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Sets the ACL token. An empty token means "no token".
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Keep the token out of debug logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("address", &self.address)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
