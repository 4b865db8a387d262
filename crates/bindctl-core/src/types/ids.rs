//! Binding rule identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a binding rule.
///
/// Assigned by the store at creation and opaque to the client. In practice
/// it is the hyphenated string form of a UUID, which is what
/// [`RuleId::CANONICAL_LEN`] measures.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Length of a complete identifier (hyphenated UUID).
    pub const CANONICAL_LEN: usize = 36;

    /// Creates a rule ID from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bindctl_core::RuleId;
    ///
    /// let id = RuleId::new("e8b2d3a1-0000-4000-8000-000000000001");
    /// assert!(id.is_canonical_len());
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Creates a new random rule ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no ID has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the ID has the length of a complete identifier.
    pub fn is_canonical_len(&self) -> bool {
        self.0.len() == Self::CANONICAL_LEN
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
