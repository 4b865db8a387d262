//! Error types for bindctl-cli
//!
//! Each variant renders as the single line printed on stderr before the
//! process exits with status 1.

use thiserror::Error;

/// Result type alias for bindctl-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bindctl-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// `--id` was not given to a command that needs it
    #[error("Cannot {action} a binding rule without specifying the --id parameter")]
    MissingId {
        /// Verb of the command, e.g. `update`
        action: &'static str,
    },

    /// A required flag was absent or empty
    #[error("Missing required '--{flag}' flag")]
    MissingFlag {
        /// Flag name without dashes
        flag: String,
    },

    /// The identifier prefix matched nothing or more than one rule
    #[error("Error determining binding rule ID: {0}")]
    ResolveId(#[source] bindctl_core::Error),

    /// No rule has the given full identifier
    #[error("Binding rule not found with ID {id:?}")]
    NotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// Fetching the current rule failed
    #[error("Error when retrieving current binding rule: {0}")]
    Retrieve(#[source] bindctl_core::Error),

    /// The store refused to create the rule
    #[error("Failed to create new binding rule: {0}")]
    Create(#[source] bindctl_core::Error),

    /// The store refused to update the rule
    #[error("Failed to update binding rule {id}: {source}")]
    Update {
        /// Identifier of the rule being updated
        id: String,
        /// Store error
        #[source]
        source: bindctl_core::Error,
    },

    /// Listing rules failed
    #[error("Failed to retrieve the binding rule list: {0}")]
    List(#[source] bindctl_core::Error),

    /// The store refused to delete the rule
    #[error("Error deleting binding rule {id}: {source}")]
    Delete {
        /// Identifier of the rule being deleted
        id: String,
        /// Store error
        #[source]
        source: bindctl_core::Error,
    },

    /// The HTTP client could not be set up
    #[error("Error connecting to the agent: {0}")]
    Client(#[from] bindctl_client::Error),

    /// Configuration file or value problem
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other core error (rendering, validation)
    #[error(transparent)]
    Core(#[from] bindctl_core::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Maps a local field check failure to its flag message.
    pub fn required(err: bindctl_core::Error) -> Self {
        match err {
            bindctl_core::Error::MissingRequiredField { field } => Error::MissingFlag { flag: field },
            other => Error::Core(other),
        }
    }

    /// Maps an identifier resolution failure for the command `action`.
    pub fn resolve(action: &'static str, err: bindctl_core::Error) -> Self {
        match err {
            bindctl_core::Error::MissingIdentifier => Error::MissingId { action },
            bindctl_core::Error::RuleNotFound { id } => Error::NotFound { id },
            other => Error::ResolveId(other),
        }
    }
}
