//! Resolved repo config
//!
//! `Spec` is what callers receive from a successful read: every default has
//! been applied and every cross-project rule has been checked.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{Stage, Workflow};
use crate::domain::value_objects::{clean_dir, ApplyRequirement, TerraformVersion};

/// Workspace used when a project does not name one.
pub const DEFAULT_WORKSPACE: &str = "default";

/// File pattern that triggers autoplan when a project sets none.
pub const DEFAULT_AUTOPLAN_WHEN_MODIFIED: &str = "**/*.tf*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autoplan {
    pub when_modified: Vec<String>,
    pub enabled: bool,
}

impl Default for Autoplan {
    fn default() -> Self {
        Self {
            when_modified: vec![DEFAULT_AUTOPLAN_WHEN_MODIFIED.to_string()],
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub dir: String,
    pub workspace: String,
    /// `None` means the project is unnamed.
    pub name: Option<String>,
    pub workflow: Option<String>,
    pub terraform_version: Option<TerraformVersion>,
    pub autoplan: Autoplan,
    pub apply_requirements: Vec<ApplyRequirement>,
}

impl Project {
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            workspace: DEFAULT_WORKSPACE.to_string(),
            name: None,
            workflow: None,
            terraform_version: None,
            autoplan: Autoplan::default(),
            apply_requirements: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = workspace.into();
        self
    }

    pub fn with_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.workflow = Some(workflow.into());
        self
    }

    /// The project's name, or `""` when unnamed.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Composite identity key, `dir/workspace`.
    pub fn dir_workspace_key(&self) -> String {
        format!("{}/{}", self.dir, self.workspace)
    }

    pub fn requires_approval(&self) -> bool {
        self.apply_requirements.contains(&ApplyRequirement::Approved)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Spec {
    pub version: i64,
    pub projects: Vec<Project>,
    pub workflows: BTreeMap<String, Workflow>,
}

impl Spec {
    pub fn find_project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }

    /// Projects at `dir` and `workspace`. `dir` is cleaned before comparison.
    pub fn find_projects_by_dir_workspace(&self, dir: &str, workspace: &str) -> Vec<&Project> {
        let dir = clean_dir(dir);
        self.projects
            .iter()
            .filter(|p| p.dir == dir && p.workspace == workspace)
            .collect()
    }

    /// Projects at `dir` across all workspaces.
    pub fn find_projects_by_dir(&self, dir: &str) -> Vec<&Project> {
        let dir = clean_dir(dir);
        self.projects.iter().filter(|p| p.dir == dir).collect()
    }

    pub fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.get(name)
    }

    pub fn plan_stage(&self, workflow: &str) -> Option<&Stage> {
        self.workflow(workflow).map(|w| &w.plan)
    }

    pub fn apply_stage(&self, workflow: &str) -> Option<&Stage> {
        self.workflow(workflow).map(|w| &w.apply)
    }
}
