//! The binding rule record and its wire representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RuleId;
use crate::error::{Error, Result};

/// How a rule's `role_name` is interpreted on a successful login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleBindType {
    /// Bind a service identity named by the role name.
    #[default]
    Service,
    /// Bind a role that must already exist.
    Existing,
}

impl RoleBindType {
    /// Returns the wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Existing => "existing",
        }
    }
}

impl fmt::Display for RoleBindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleBindType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "service" => Ok(Self::Service),
            "existing" => Ok(Self::Existing),
            other => Err(Error::validation(
                "role-bind-type",
                format!("expected \"service\" or \"existing\", got {other:?}"),
            )),
        }
    }
}

/// A binding rule as stored by the remote store.
///
/// Field names on the wire follow the store's PascalCase JSON. Absent keys
/// decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// Store-assigned identifier
    #[serde(rename = "ID", default, skip_serializing_if = "RuleId::is_empty")]
    pub id: RuleId,

    /// Identity provider the rule is scoped to
    #[serde(rename = "IDPName", default)]
    pub provider_name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Interpretation of `role_name`
    #[serde(default)]
    pub role_bind_type: RoleBindType,

    /// Role name template, e.g. `k8s-{{serviceaccount.name}}`
    #[serde(default)]
    pub role_name: String,

    /// Expression over verified identity attributes; empty matches everything
    #[serde(default)]
    pub selector: String,

    /// Content hash computed by the store
    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hash: Vec<u8>,

    /// Store index at creation
    #[serde(default, skip_serializing_if = "is_zero")]
    pub create_index: u64,

    /// Store index at last modification
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modify_index: u64,
}

impl Rule {
    /// Returns a copy with the store-maintained metadata cleared.
    pub fn without_meta(&self) -> Self {
        Self {
            hash: Vec::new(),
            create_index: 0,
            modify_index: 0,
            ..self.clone()
        }
    }

    /// Lowercase hex rendering of the content hash.
    pub fn hash_hex(&self) -> String {
        self.hash.iter().map(|b| format!("{b:02x}")).collect()
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// Fields for a rule that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRule {
    /// Identity provider name (required)
    pub provider_name: String,
    /// Free-text description
    pub description: String,
    /// Interpretation of `role_name`
    pub role_bind_type: RoleBindType,
    /// Role name template (required)
    pub role_name: String,
    /// Selector expression
    pub selector: String,
}

impl NewRule {
    /// Checks required fields without touching the store.
    ///
    /// The provider name is checked before the role name.
    pub fn validate(&self) -> Result<()> {
        if self.provider_name.is_empty() {
            return Err(Error::missing_field("idp-name"));
        }
        if self.role_name.is_empty() {
            return Err(Error::missing_field("role-name"));
        }
        Ok(())
    }

    /// Validates and converts into a record ready for submission.
    pub fn into_rule(self) -> Result<Rule> {
        self.validate()?;
        Ok(Rule {
            provider_name: self.provider_name,
            description: self.description,
            role_bind_type: self.role_bind_type,
            role_name: self.role_name,
            selector: self.selector,
            ..Rule::default()
        })
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) if !encoded.is_empty() => STANDARD
                .decode(encoded.as_bytes())
                .map_err(serde::de::Error::custom),
            _ => Ok(Vec::new()),
        }
    }
}
