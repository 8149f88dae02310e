//! CLI tests for `atlantis-yaml check`

mod common;

use common::*;

#[test]
fn check_valid_config_lists_projects() {
    let repo = TestRepo::with_config(VALID_CONFIG);

    let result = repo.run(&["check"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .starts_with("atlantis.yaml: version 2, 2 projects, 1 workflow\n"));
    assert!(result
        .stdout
        .contains("  - staging dir=infra workspace=staging workflow=custom autoplan=on"));
    assert!(result
        .stdout
        .contains("  - production dir=infra workspace=production autoplan=on requires=approved"));
}

#[test]
fn check_missing_config_is_not_an_error() {
    let repo = TestRepo::empty();

    let result = repo.run(&["check"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("No atlantis.yaml in"));
    assert!(result.stdout.contains("default project settings apply"));
}

#[test]
fn check_undefined_workflow_fails() {
    let repo = TestRepo::with_config(UNDEFINED_WORKFLOW_CONFIG);

    let result = repo.run(&["check"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains(r#"parsing atlantis.yaml: workflow "custom" is not defined"#),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn check_typo_fails_with_suggestion() {
    let repo = TestRepo::with_config(TYPO_CONFIG);

    let result = repo.run(&["check"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unknown field `projcts`"));
    assert!(result.stderr.contains("did you mean `projects`?"));
}

#[test]
fn check_json_emits_resolved_spec() {
    let repo = TestRepo::with_config(VALID_CONFIG);

    let result = repo.run(&["check", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "check");
    assert_eq!(event["found"], true);
    assert_eq!(event["spec"]["version"], 2);
    assert_eq!(event["spec"]["projects"][0]["name"], "staging");
    assert_eq!(event["spec"]["projects"][1]["apply_requirements"][0], "approved");
    assert_eq!(event["spec"]["projects"][1]["autoplan"]["when_modified"][0], "**/*.tf*");
    assert_eq!(
        event["spec"]["workflows"]["custom"]["plan"]["steps"][0],
        serde_json::json!({"step": "run", "command": "make lint"})
    );
    assert_eq!(
        event["spec"]["workflows"]["custom"]["apply"]["steps"][0]["step"],
        "apply"
    );
}

#[test]
fn check_json_reports_missing_config() {
    let repo = TestRepo::empty();

    let result = repo.run(&["check", "--json"]);

    assert!(result.success);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["found"], false);
}

#[test]
fn check_json_reports_error_kind() {
    let repo = TestRepo::with_config(UNDEFINED_WORKFLOW_CONFIG);

    let result = repo.run(&["check", "--json"]);

    assert!(!result.success);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["kind"], "workflow_reference_failure");
}
