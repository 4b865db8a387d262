//! `read`, `list` and `delete`

use crate::common::{RULE_ID, SIBLING_ID, TestHarness, UNKNOWN_ID};

#[tokio::test]
async fn test_read_by_prefix() {
    let harness = TestHarness::with_rule();
    let outcome = harness.run(&["read", "--id", &RULE_ID[..8]]).await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    assert!(outcome.stdout.starts_with(&format!("ID:               {RULE_ID}\n")));
    assert!(outcome.stdout.contains("Description:      test rule\n"));
}

#[tokio::test]
async fn test_read_requires_id() {
    let harness = TestHarness::with_rule();
    let outcome = harness.run(&["read"]).await;

    assert_eq!(
        outcome.stderr,
        "Cannot read a binding rule without specifying the --id parameter"
    );
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_read_unknown_id() {
    let harness = TestHarness::with_rule();
    let outcome = harness.run(&["read", "--id", UNKNOWN_ID]).await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("Binding rule not found with ID"));
}

#[tokio::test]
async fn test_list_all() {
    let harness = TestHarness::with_siblings();
    let outcome = harness.run(&["list"]).await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    assert!(outcome.stdout.contains(RULE_ID));
    assert!(outcome.stdout.contains(SIBLING_ID));
    // Blocks are separated by one blank line.
    assert_eq!(outcome.stdout.matches("\n\nID:").count(), 1);
}

#[tokio::test]
async fn test_list_filters_by_provider() {
    let harness = TestHarness::with_rule();
    let outcome = harness.run(&["list", "--idp-name", "other"]).await;

    assert_eq!(outcome.code, 0);
    assert!(outcome.stdout.is_empty());
}

#[tokio::test]
async fn test_list_json_empty_store() {
    let harness = TestHarness::new();
    let outcome = harness.run(&["list", "--format", "json"]).await;

    assert_eq!(outcome.stdout.trim(), "[]");
}

#[tokio::test]
async fn test_delete_by_prefix() {
    let harness = TestHarness::with_siblings();
    let outcome = harness.run(&["delete", "--id", &SIBLING_ID[..6]]).await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        format!("Binding rule \"{SIBLING_ID}\" deleted successfully\n")
    );
    assert_eq!(harness.store.len(), 1);
    assert!(harness.store.get(SIBLING_ID).is_none());
}

#[tokio::test]
async fn test_delete_ambiguous_prefix_keeps_rules() {
    let harness = TestHarness::with_siblings();
    let outcome = harness.run(&["delete", "--id", "6c2e"]).await;

    assert_eq!(outcome.code, 1);
    assert!(outcome.stderr.contains("Error determining binding rule ID"));
    assert_eq!(harness.store.len(), 2);
}
