//! Test fixtures - reusable atlantis.yaml content.

/// Two named projects sharing a dir, one custom workflow
pub const VALID_CONFIG: &str = r#"version: 2
projects:
- name: staging
  dir: infra
  workspace: staging
  workflow: custom
- name: production
  dir: infra
  workspace: production
  apply_requirements: [approved]
workflows:
  custom:
    plan:
      steps:
      - run: make lint
      - init
      - plan
"#;

/// A project pointing at a workflow that does not exist
pub const UNDEFINED_WORKFLOW_CONFIG: &str = r#"version: 2
projects:
- dir: "."
  workflow: custom
workflows: {}
"#;

/// A misspelled top-level key
pub const TYPO_CONFIG: &str = r#"version: 2
projcts:
- dir: "."
"#;
