//! Error types for bindctl-client

use thiserror::Error;

/// Result type alias for bindctl-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up the client.
///
/// Failures of individual requests are reported as [`bindctl_core::Error`]
/// through the [`RuleStore`](bindctl_core::RuleStore) trait.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Client configuration is unusable
    #[error("Invalid client configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
