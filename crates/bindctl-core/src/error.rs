//! Error types for bindctl-core

use thiserror::Error;

/// Result type alias for bindctl-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, merging or persisting binding rules.
///
/// Every variant ends the current invocation; none is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No identifier or prefix was supplied where one is required.
    #[error("no binding rule ID was given")]
    MissingIdentifier,

    /// A full-length identifier did not match any stored rule.
    #[error("binding rule not found with ID {id:?}")]
    RuleNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A prefix did not match any stored rule identifier.
    #[error("no such binding rule ID with prefix: {prefix}")]
    PrefixNotFound {
        /// The prefix that was searched for
        prefix: String,
    },

    /// A prefix matched more than one stored rule identifier.
    #[error("partial binding rule ID {prefix:?} is not unique ({matches} matches); supply more characters")]
    AmbiguousPrefix {
        /// The prefix that was searched for
        prefix: String,
        /// Number of identifiers sharing the prefix
        matches: usize,
    },

    /// A field that must be non-empty was absent.
    #[error("missing required field '{field}'")]
    MissingRequiredField {
        /// Field name, in its flag spelling (e.g. `role-name`)
        field: String,
    },

    /// A field value could not be interpreted.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        /// Field name, in its flag spelling
        field: String,
        /// What went wrong
        message: String,
    },

    /// The store rejected the request. The message is the store's, verbatim.
    #[error("{message}")]
    RemoteRejected {
        /// Status code reported by the store
        status: u16,
        /// Message returned by the store
        message: String,
    },

    /// The remote call could not complete (connectivity, timeout, decoding).
    #[error("transport failure: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns whether this error means "no matching rule".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::RuleNotFound { .. } | Error::PrefixNotFound { .. }
        )
    }

    /// Creates a missing required field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Creates a validation error for a field.
    pub fn validation<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a store rejection error.
    pub fn rejected<S: Into<String>>(status: u16, message: S) -> Self {
        Error::RemoteRejected {
            status,
            message: message.into(),
        }
    }

    /// Creates a transport error with a message and source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
