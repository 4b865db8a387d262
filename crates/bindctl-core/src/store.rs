//! The rule store capability.
//!
//! [`RuleStore`] is the boundary to the coordination service that persists
//! binding rules. Commands receive it as a parameter, so they run the same
//! against the HTTP client and against [`InMemoryRuleStore`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::{Rule, RuleId};

/// Request/response access to stored binding rules.
///
/// Implementations must return complete listings from [`RuleStore::list`];
/// prefix resolution cannot detect a truncated result.
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Fetch a rule by its full identifier. `Ok(None)` if it does not exist.
    async fn read(&self, id: &RuleId) -> Result<Option<Rule>>;

    /// List rules, optionally restricted to one identity provider.
    async fn list(&self, provider: Option<&str>) -> Result<Vec<Rule>>;

    /// Create a rule. The store assigns the identifier.
    async fn create(&self, rule: &Rule) -> Result<Rule>;

    /// Replace the stored rule with the same identifier.
    async fn update(&self, rule: &Rule) -> Result<Rule>;

    /// Delete a rule by its full identifier.
    async fn delete(&self, id: &RuleId) -> Result<()>;
}

// ============================================================================
// InMemoryRuleStore
// ============================================================================

/// Rule store held in process memory.
///
/// Mirrors the server-side checks that matter to the CLI: a role name is
/// required, selectors must look like expressions, updates and deletes need
/// an existing rule. Every call is counted so tests can assert that a
/// command failed before reaching the store.
#[derive(Debug, Default)]
pub struct InMemoryRuleStore {
    state: RwLock<State>,
    calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct State {
    rules: BTreeMap<RuleId, Rule>,
    index: u64,
}

impl InMemoryRuleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `rules`, keeping their identifiers.
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let store = Self::new();
        for rule in rules {
            store.insert(rule);
        }
        store
    }

    /// Stores `rule` as-is, assigning an identifier if it has none.
    ///
    /// Not counted as a store call.
    pub fn insert(&self, mut rule: Rule) -> Rule {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if rule.id.is_empty() {
            rule.id = RuleId::generate();
        }
        state.index += 1;
        rule.create_index = state.index;
        rule.modify_index = state.index;
        rule.hash = content_hash(&rule);
        state.rules.insert(rule.id.clone(), rule.clone());
        rule
    }

    /// Returns a stored rule without counting a call.
    pub fn get(&self, id: &str) -> Option<Rule> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.rules.get(&RuleId::new(id)).cloned()
    }

    /// Number of stored rules.
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.rules.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of [`RuleStore`] calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self, operation: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        log::trace!("In-memory rule store: {operation}");
    }
}

#[async_trait]
impl RuleStore for InMemoryRuleStore {
    async fn read(&self, id: &RuleId) -> Result<Option<Rule>> {
        self.record_call("read");
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.rules.get(id).cloned())
    }

    async fn list(&self, provider: Option<&str>) -> Result<Vec<Rule>> {
        self.record_call("list");
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state
            .rules
            .values()
            .filter(|rule| provider.is_none_or(|name| rule.provider_name == name))
            .cloned()
            .collect())
    }

    async fn create(&self, rule: &Rule) -> Result<Rule> {
        self.record_call("create");
        if !rule.id.is_empty() {
            return Err(Error::rejected(
                400,
                "Invalid Binding Rule: ID should not be specified on create",
            ));
        }
        if rule.provider_name.is_empty() {
            return Err(Error::rejected(
                400,
                "Invalid Binding Rule: no IDPName is set",
            ));
        }
        check_rule(rule)?;
        Ok(self.insert(rule.without_meta()))
    }

    async fn update(&self, rule: &Rule) -> Result<Rule> {
        self.record_call("update");
        check_rule(rule)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let Some(current) = state.rules.get(&rule.id).cloned() else {
            return Err(Error::rejected(
                400,
                format!("Cannot find binding rule {}", rule.id),
            ));
        };
        state.index += 1;
        let mut updated = rule.clone();
        updated.provider_name = current.provider_name;
        updated.create_index = current.create_index;
        updated.modify_index = state.index;
        updated.hash = content_hash(&updated);
        state.rules.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &RuleId) -> Result<()> {
        self.record_call("delete");
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.rules.remove(id);
        Ok(())
    }
}

fn check_rule(rule: &Rule) -> Result<()> {
    if rule.role_name.is_empty() {
        return Err(Error::rejected(
            400,
            "Invalid Binding Rule: no RoleName is set",
        ));
    }
    if !selector_is_plausible(&rule.selector) {
        return Err(Error::rejected(
            400,
            format!("Selector is invalid: {:?}", rule.selector),
        ));
    }
    Ok(())
}

/// Rough syntax check: every `and`/`or` clause must contain a comparison.
fn selector_is_plausible(selector: &str) -> bool {
    const OPERATORS: [&str; 5] = ["==", "!=", " in ", " contains ", " matches "];

    if selector.trim().is_empty() {
        return true;
    }
    selector
        .split(" and ")
        .flat_map(|clause| clause.split(" or "))
        .all(|clause| OPERATORS.iter().any(|op| clause.contains(op)))
}

fn content_hash(rule: &Rule) -> Vec<u8> {
    let mut hasher = blake3::Hasher::new();
    for field in [
        rule.provider_name.as_str(),
        rule.description.as_str(),
        rule.role_bind_type.as_str(),
        rule.role_name.as_str(),
        rule.selector.as_str(),
    ] {
        hasher.update(field.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize().as_bytes().to_vec()
}
