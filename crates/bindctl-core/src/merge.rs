//! Merge and replace update strategies.
//!
//! [`merge`] computes the record to submit for an update from the stored
//! record and the caller's [`RuleOverrides`]:
//!
//! - [`UpdateMode::Merge`] keeps every field the caller did not supply.
//! - [`UpdateMode::Replace`] starts from an empty record, so omitted fields
//!   fall back to their defaults.
//!
//! In both modes the identifier and provider name come from the stored
//! record, and the result always carries a non-empty role name.
//!
//! ```
//! use bindctl_core::{merge, Rule, RuleOverrides, UpdateMode};
//!
//! let stored = Rule {
//!     description: "test rule".into(),
//!     role_name: "k8s-{{serviceaccount.name}}".into(),
//!     ..Rule::default()
//! };
//! let overrides = RuleOverrides::new().with_role_name("role-updated");
//!
//! let merged = merge(&stored, &overrides, UpdateMode::Merge).unwrap();
//! assert_eq!(merged.description, "test rule");
//!
//! let replaced = merge(&stored, &overrides, UpdateMode::Replace).unwrap();
//! assert_eq!(replaced.description, "");
//! ```

use crate::error::{Error, Result};
use crate::types::{Rule, RuleOverrides, UpdateMode};

/// Computes the record to submit for an update.
///
/// Fails with [`Error::MissingRequiredField`] when replace mode is used
/// without a role name, or when the result would have an empty role name.
pub fn merge(existing: &Rule, overrides: &RuleOverrides, mode: UpdateMode) -> Result<Rule> {
    overrides.check_required(mode)?;

    let base = match mode {
        UpdateMode::Merge => existing.clone(),
        UpdateMode::Replace => Rule {
            id: existing.id.clone(),
            provider_name: existing.provider_name.clone(),
            ..Rule::default()
        },
    };

    let rule = overrides.apply_to(base);
    if rule.role_name.is_empty() {
        return Err(Error::missing_field("role-name"));
    }

    log::debug!(
        "Computed {mode:?} update for binding rule {} ({} field(s) supplied)",
        rule.id,
        supplied_count(overrides)
    );
    Ok(rule)
}

fn supplied_count(overrides: &RuleOverrides) -> usize {
    [
        overrides.description.is_some(),
        overrides.role_bind_type.is_some(),
        overrides.role_name.is_some(),
        overrides.selector.is_some(),
    ]
    .into_iter()
    .filter(|supplied| *supplied)
    .count()
}
