//! Caller-supplied field values for an update.

use super::rule::{RoleBindType, Rule};
use crate::error::{Error, Result};

/// Update strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Supplied fields replace stored ones; omitted fields are kept.
    #[default]
    Merge,
    /// Build a fresh record from the supplied fields only; omitted fields
    /// take their default value.
    Replace,
}

/// New values for the editable fields of a rule.
///
/// `None` means "not supplied". `Some(String::new())` is an explicit empty
/// value and clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOverrides {
    /// New description
    pub description: Option<String>,
    /// New role bind type
    pub role_bind_type: Option<RoleBindType>,
    /// New role name
    pub role_name: Option<String>,
    /// New selector
    pub selector: Option<String>,
}

impl RuleOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the role bind type.
    pub fn with_role_bind_type(mut self, role_bind_type: RoleBindType) -> Self {
        self.role_bind_type = Some(role_bind_type);
        self
    }

    /// Sets the role name.
    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    /// Sets the selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Returns `true` if no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.role_bind_type.is_none()
            && self.role_name.is_none()
            && self.selector.is_none()
    }

    /// Checks the fields that must be supplied for `mode`.
    ///
    /// Needs no store access, so callers run it before any remote call.
    pub fn check_required(&self, mode: UpdateMode) -> Result<()> {
        match (mode, self.role_name.as_deref()) {
            (UpdateMode::Replace, None | Some("")) => Err(Error::missing_field("role-name")),
            _ => Ok(()),
        }
    }

    /// Writes every supplied field onto `rule`, leaving the rest untouched.
    pub(crate) fn apply_to(&self, mut rule: Rule) -> Rule {
        if let Some(description) = &self.description {
            rule.description = description.clone();
        }
        if let Some(role_bind_type) = self.role_bind_type {
            rule.role_bind_type = role_bind_type;
        }
        if let Some(role_name) = &self.role_name {
            rule.role_name = role_name.clone();
        }
        if let Some(selector) = &self.selector {
            rule.selector = selector.clone();
        }
        rule
    }
}
