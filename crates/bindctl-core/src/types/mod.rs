//! Core types for binding rules.

mod ids;
mod overrides;
mod proptests;
mod rule;

pub use ids::RuleId;
pub use overrides::{RuleOverrides, UpdateMode};
pub use rule::{NewRule, RoleBindType, Rule};
