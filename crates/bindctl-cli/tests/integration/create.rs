//! `create`

use bindctl_core::RoleBindType;

use crate::common::TestHarness;

#[tokio::test]
async fn test_missing_idp_name() {
    let harness = TestHarness::new();
    let outcome = harness.run(&["create", "--role-name=admins"]).await;

    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stderr, "Missing required '--idp-name' flag");
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_missing_role_name() {
    let harness = TestHarness::new();
    let outcome = harness.run(&["create", "--idp-name=k8s"]).await;

    assert_eq!(outcome.code, 1);
    assert_eq!(outcome.stderr, "Missing required '--role-name' flag");
    assert_eq!(harness.store.call_count(), 0);
}

#[tokio::test]
async fn test_idp_name_checked_first() {
    let harness = TestHarness::new();
    let outcome = harness.run(&["create"]).await;

    assert_eq!(outcome.stderr, "Missing required '--idp-name' flag");
}

#[tokio::test]
async fn test_create_with_defaults() {
    let harness = TestHarness::new();
    let outcome = harness
        .run(&["create", "--idp-name=k8s", "--role-name=k8s-{{serviceaccount.name}}"])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    assert_eq!(harness.store.len(), 1);
    assert!(outcome.stdout.contains("IdentityProvider: k8s\n"));
    assert!(outcome.stdout.contains("RoleBindType:     service\n"));
    assert!(outcome.stdout.contains("RoleName:         k8s-{{serviceaccount.name}}\n"));
}

#[tokio::test]
async fn test_create_json_output() {
    let harness = TestHarness::new();
    let outcome = harness
        .run(&[
            "create",
            "--idp-name=k8s",
            "--role-name=admins",
            "--role-bind-type=existing",
            "--description=admins",
            "--selector=serviceaccount.namespace==default",
            "--format=json",
        ])
        .await;

    assert_eq!(outcome.code, 0, "err: {}", outcome.stderr);
    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(value["IDPName"], "k8s");
    assert_eq!(value["RoleBindType"], "existing");
    assert!(value.get("CreateIndex").is_none());

    let id = value["ID"].as_str().unwrap();
    assert_eq!(harness.rule(id).role_bind_type, RoleBindType::Existing);
}

#[tokio::test]
async fn test_create_invalid_selector() {
    let harness = TestHarness::new();
    let outcome = harness
        .run(&["create", "--idp-name=k8s", "--role-name=admins", "--selector=foo"])
        .await;

    assert_eq!(outcome.code, 1);
    assert!(
        outcome
            .stderr
            .starts_with("Failed to create new binding rule: Selector is invalid")
    );
    assert!(harness.store.is_empty());
}
