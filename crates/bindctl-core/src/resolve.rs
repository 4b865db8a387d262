//! Full-or-prefix identifier resolution.
//!
//! Operators may type either a complete rule identifier or any unambiguous
//! prefix of one. Resolution takes one of two paths:
//!
//! 1. A token of [`RuleId::CANONICAL_LEN`] characters is looked up directly.
//!    A miss is reported as [`Error::RuleNotFound`]; there is no fallback to
//!    prefix matching.
//! 2. Any shorter token is matched against the identifiers of every stored
//!    rule. It must match exactly one of them.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::store::RuleStore;
use crate::types::RuleId;

/// Resolves `token` to the identifier of exactly one stored rule.
///
/// Performs one read-only store call. Never mutates the store.
pub async fn resolve_rule_id<S>(store: &S, token: &str) -> Result<RuleId>
where
    S: RuleStore + ?Sized,
{
    if token.is_empty() {
        return Err(Error::MissingIdentifier);
    }

    let id = RuleId::new(token);
    if id.is_canonical_len() {
        log::debug!("Looking up binding rule {token} directly");
        // Only a record carrying the requested identifier counts as found.
        return match store.read(&id).await? {
            Some(rule) if rule.id == id => Ok(id),
            _ => Err(Error::RuleNotFound {
                id: token.to_string(),
            }),
        };
    }

    log::debug!("Resolving binding rule prefix {token:?} against the full listing");
    let rules = store.list(None).await?;
    match_prefix(rules.iter().map(|rule| &rule.id), token)
}

/// Picks the single identifier among `ids` that starts with `prefix`.
///
/// Duplicate entries of the same identifier count once.
pub fn match_prefix<'a, I>(ids: I, prefix: &str) -> Result<RuleId>
where
    I: IntoIterator<Item = &'a RuleId>,
{
    let matches: BTreeSet<&RuleId> = ids
        .into_iter()
        .filter(|id| id.as_str().starts_with(prefix))
        .collect();

    let mut iter = matches.iter();
    match (iter.next(), iter.next()) {
        (Some(id), None) => Ok((*id).clone()),
        (None, _) => Err(Error::PrefixNotFound {
            prefix: prefix.to_string(),
        }),
        (Some(_), Some(_)) => Err(Error::AmbiguousPrefix {
            prefix: prefix.to_string(),
            matches: matches.len(),
        }),
    }
}
