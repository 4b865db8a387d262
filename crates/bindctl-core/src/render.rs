//! Output rendering for binding rules.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Rule;

/// Output format for rendered rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned `Key: value` lines
    #[default]
    Pretty,
    /// Pretty-printed JSON in the store's wire format
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::validation(
                "format",
                format!("expected \"pretty\" or \"json\", got {other:?}"),
            )),
        }
    }
}

/// Renders one rule. Metadata is included only when `show_meta` is set.
pub fn render_rule(rule: &Rule, show_meta: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty(rule, show_meta)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&visible(rule, show_meta))?),
    }
}

/// Renders a list of rules: blank-line separated blocks, or a JSON array.
pub fn render_rules(rules: &[Rule], show_meta: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(rules
            .iter()
            .map(|rule| pretty(rule, show_meta))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let visible: Vec<Rule> = rules.iter().map(|r| visible(r, show_meta)).collect();
            Ok(serde_json::to_string_pretty(&visible)?)
        }
    }
}

fn visible(rule: &Rule, show_meta: bool) -> Rule {
    if show_meta {
        rule.clone()
    } else {
        rule.without_meta()
    }
}

fn pretty(rule: &Rule, show_meta: bool) -> String {
    let mut lines = vec![
        format!("ID:               {}", rule.id),
        format!("IdentityProvider: {}", rule.provider_name),
        format!("Description:      {}", rule.description),
        format!("RoleBindType:     {}", rule.role_bind_type),
        format!("RoleName:         {}", rule.role_name),
        format!("Selector:         {}", rule.selector),
    ];
    if show_meta {
        lines.push(format!("Hash:             {}", rule.hash_hex()));
        lines.push(format!("Create Index:     {}", rule.create_index));
        lines.push(format!("Modify Index:     {}", rule.modify_index));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}
