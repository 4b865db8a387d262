//! Common test utilities and harness for bindctl integration tests.

use bindctl_cli::{Cli, execute};
use bindctl_core::{InMemoryRuleStore, RoleBindType, Rule, RuleId};
use clap::Parser;

/// Identifier of the rule seeded by [`TestHarness::with_rule`].
pub const RULE_ID: &str = "6c2ea4b0-3f53-4a8b-9d1e-1f1e6e2d9c11";

/// Second rule sharing the `6c2e` prefix with [`RULE_ID`].
pub const SIBLING_ID: &str = "6c2ef1d7-0b8e-4c55-a2d4-5b9e0c7a8f33";

/// Well-formed identifier that no seeded rule uses.
pub const UNKNOWN_ID: &str = "f00df00d-0000-4000-8000-000000000000";

/// Selector used by the update scenarios.
pub const ALT_SELECTOR: &str = "serviceaccount.namespace==alt and serviceaccount.name==demo";

/// Result of one command invocation.
#[derive(Debug)]
pub struct Outcome {
    /// 0 on success, 1 on failure
    pub code: i32,
    /// Text written to the output stream
    pub stdout: String,
    /// Error message, empty on success
    pub stderr: String,
}

/// Test harness holding the store that commands run against.
pub struct TestHarness {
    /// In-memory store
    pub store: InMemoryRuleStore,
}

impl TestHarness {
    /// Creates a harness with an empty store.
    pub fn new() -> Self {
        Self {
            store: InMemoryRuleStore::new(),
        }
    }

    /// Creates a harness holding one rule with [`RULE_ID`].
    pub fn with_rule() -> Self {
        let harness = Self::new();
        harness.store.insert(sample_rule(RULE_ID, RoleBindType::Service));
        harness
    }

    /// Creates a harness holding two rules whose identifiers share a prefix.
    pub fn with_siblings() -> Self {
        let harness = Self::with_rule();
        harness.store.insert(sample_rule(SIBLING_ID, RoleBindType::Service));
        harness
    }

    /// Parses `args` as a bindctl command line and runs it.
    pub async fn run(&self, args: &[&str]) -> Outcome {
        let cli = Cli::try_parse_from(std::iter::once("bindctl").chain(args.iter().copied()))
            .expect("command line should parse");
        let mut out = Vec::new();
        let result = execute(&self.store, &cli.command, &mut out).await;
        let stdout = String::from_utf8(out).expect("output should be UTF-8");
        match result {
            Ok(()) => Outcome {
                code: 0,
                stdout,
                stderr: String::new(),
            },
            Err(e) => Outcome {
                code: 1,
                stdout,
                stderr: e.to_string(),
            },
        }
    }

    /// Returns the stored rule with `id`.
    pub fn rule(&self, id: &str) -> Rule {
        self.store.get(id).expect("rule should be stored")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// The rule every scenario starts from.
pub fn sample_rule(id: &str, role_bind_type: RoleBindType) -> Rule {
    Rule {
        id: RuleId::new(id),
        provider_name: "k8s".to_string(),
        description: "test rule".to_string(),
        role_bind_type,
        role_name: "k8s-{{serviceaccount.name}}".to_string(),
        selector: "serviceaccount.namespace==default".to_string(),
        ..Rule::default()
    }
}
