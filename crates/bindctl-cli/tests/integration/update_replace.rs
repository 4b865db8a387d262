//! `update --no-merge`: the rule is rebuilt from the flags alone.

use bindctl_core::RoleBindType;

use crate::common::{ALT_SELECTOR, RULE_ID, TestHarness, UNKNOWN_ID, sample_rule};

/// Harness whose rule starts as `existing` so a reset to the default shows.
fn existing_harness() -> TestHarness {
    let harness = TestHarness::new();
    harness.store.insert(sample_rule(RULE_ID, RoleBindType::Existing));
    harness
}

#[tokio::test]
async fn test_rule_id_required() {
    let harness = existing_harness();
    let outcome = harness.run(&["update", "--no-merge"]).await;

    assert_eq!(outcome.code, 1);
    assert_eq!(
        outcome.stderr,
        "Cannot update a binding rule without specifying the --id parameter"
    );
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_missing_role_name_fails_before_store() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            &format!("--id={RULE_ID}"),
            "--description=test rule edited",
            "--role-bind-type",
            "existing",
            &format!("--selector={ALT_SELECTOR}"),
        ])
        .await;

    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stderr, "Missing required '--role-name' flag");
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_missing_role_name_wins_over_bad_prefix() {
    let harness = existing_harness();
    let outcome = harness
        .run(&["update", "--no-merge", "--id", &UNKNOWN_ID[..5]])
        .await;

    assert_eq!(outcome.stderr, "Missing required '--role-name' flag");
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_partial_id_matches_nothing() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            &UNKNOWN_ID[..5],
            "--role-name=role-updated",
        ])
        .await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("Error determining binding rule ID"));
}

#[tokio::test]
async fn test_exact_id_does_not_exist() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            UNKNOWN_ID,
            "--role-name=role-updated",
        ])
        .await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("Binding rule not found with ID"));
}

#[tokio::test]
async fn test_selector_rejected_by_store() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            RULE_ID,
            "--description=test rule edited",
            "--role-bind-type",
            "service",
            "--role-name=role-updated",
            "--selector",
            "foo",
        ])
        .await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("Selector is invalid"));
}

#[tokio::test]
async fn test_update_all_fields() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            RULE_ID,
            "--description=test rule edited",
            "--role-bind-type",
            "service",
            "--role-name=role-updated",
            &format!("--selector={ALT_SELECTOR}"),
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    let rule = harness.rule(RULE_ID);
    assert_eq!(rule.description, "test rule edited");
    assert_eq!(rule.role_name, "role-updated");
    assert_eq!(rule.role_bind_type, RoleBindType::Service);
    assert_eq!(rule.selector, ALT_SELECTOR);
    assert_eq!(rule.provider_name, "k8s");
}

#[tokio::test]
async fn test_update_all_fields_by_prefix() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            &RULE_ID[..5],
            "--description=test rule edited",
            "--role-bind-type",
            "service",
            "--role-name=role-updated",
            &format!("--selector={ALT_SELECTOR}"),
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    assert_eq!(harness.rule(RULE_ID).role_name, "role-updated");
}

#[tokio::test]
async fn test_omitted_description_is_cleared() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            RULE_ID,
            "--role-bind-type",
            "service",
            "--role-name=role-updated",
            &format!("--selector={ALT_SELECTOR}"),
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    let rule = harness.rule(RULE_ID);
    assert!(rule.description.is_empty());
    assert_eq!(rule.role_name, "role-updated");
    assert_eq!(rule.selector, ALT_SELECTOR);
}

#[tokio::test]
async fn test_omitted_role_bind_type_resets_to_service() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            RULE_ID,
            "--description=test rule edited",
            "--role-name=role-updated",
            &format!("--selector={ALT_SELECTOR}"),
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    let rule = harness.rule(RULE_ID);
    assert_eq!(rule.role_bind_type, RoleBindType::Service);
    assert_eq!(rule.description, "test rule edited");
}

#[tokio::test]
async fn test_omitted_selector_is_cleared() {
    let harness = existing_harness();
    let outcome = harness
        .run(&[
            "update",
            "--no-merge",
            "--id",
            RULE_ID,
            "--description=test rule edited",
            "--role-bind-type",
            "existing",
            "--role-name=role-updated",
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    let rule = harness.rule(RULE_ID);
    assert!(rule.selector.is_empty());
    assert_eq!(rule.role_bind_type, RoleBindType::Existing);
}
