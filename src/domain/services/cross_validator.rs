//! Cross-project validation
//!
//! Rules that span more than one entry of the manifest and therefore cannot
//! live on a single raw type:
//!
//! 1. every project's `workflow` names a defined workflow (checked on the raw
//!    document, before defaults are applied)
//! 2. project names are unique, and projects sharing a `dir`/`workspace` are
//!    distinguishable by name (checked on the resolved spec, where the
//!    workspace default is already in place)
//!
//! Checks walk projects in file order and stop at the first failure.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::RawSpec;
use crate::domain::entities::Spec;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CrossValidationError {
    #[error("workflow {workflow:?} is not defined")]
    UndefinedWorkflow { workflow: String },

    #[error("found two or more projects with name {name:?}; project names must be unique")]
    DuplicateProjectName { name: String },

    #[error(
        "there are two or more projects with dir: {dir:?} workspace: {workspace:?} that are not all named; \
         they must have a 'name' key so they can be targeted for apply's separately"
    )]
    UnnamedDirWorkspace { dir: String, workspace: String },
}

/// Every project that names a workflow must name one defined under `workflows`.
pub fn validate_workflows(spec: &RawSpec) -> Result<(), CrossValidationError> {
    for project in &spec.projects {
        let Some(workflow) = &project.workflow else {
            continue;
        };
        if !spec.workflows.contains_key(workflow) {
            return Err(CrossValidationError::UndefinedWorkflow {
                workflow: workflow.clone(),
            });
        }
    }
    debug!(
        projects = spec.projects.len(),
        workflows = spec.workflows.len(),
        "workflow references resolved"
    );
    Ok(())
}

/// Project names are unique, and a repeated `dir`/`workspace` must be named.
///
/// Only the arriving project is checked for a name: the first project at a
/// given `dir`/`workspace` may stay unnamed even when later ones are named.
pub fn validate_project_names(spec: &Spec) -> Result<(), CrossValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for project in &spec.projects {
        if let Some(name) = project.name.as_deref() {
            if !seen.insert(name) {
                return Err(CrossValidationError::DuplicateProjectName {
                    name: name.to_string(),
                });
            }
        }
    }

    let mut names_by_key: HashMap<String, Vec<&str>> = HashMap::new();
    for project in &spec.projects {
        let names = names_by_key.entry(project.dir_workspace_key()).or_default();
        if !names.is_empty() && project.name.is_none() {
            return Err(CrossValidationError::UnnamedDirWorkspace {
                dir: project.dir.clone(),
                workspace: project.workspace.clone(),
            });
        }
        names.push(project.name_or_empty());
    }

    debug!(
        projects = spec.projects.len(),
        named = seen.len(),
        "project identities are unique"
    );
    Ok(())
}
