//! bindctl core: shared types, errors and decision logic.
//!
//! This crate has no internal bindctl dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Binding rule records, identifiers and update overrides
//! - [`store`]: The [`RuleStore`] capability and an in-memory implementation
//! - [`resolve`]: Full-or-prefix identifier resolution
//! - [`merge`]: Merge and replace update strategies
//! - [`render`]: Human-readable and JSON output

#![forbid(unsafe_code)]

pub mod error;
pub mod merge;
pub mod render;
pub mod resolve;
pub mod store;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use merge::merge;
pub use render::{OutputFormat, render_rule, render_rules};
pub use resolve::{match_prefix, resolve_rule_id};
pub use store::{InMemoryRuleStore, RuleStore};
pub use types::{NewRule, RoleBindType, Rule, RuleId, RuleOverrides, UpdateMode};
