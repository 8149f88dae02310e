//! Raw → resolved conversion. Applies every default.

use crate::domain::entities::{Autoplan, Project, Spec, Stage, Step, Workflow, DEFAULT_WORKSPACE};
use crate::domain::ports::Resolvable;
use crate::domain::value_objects::clean_dir;

use super::{RawAutoplan, RawProject, RawSpec, RawStage, RawStep, RawWorkflow};

impl Resolvable for RawSpec {
    type Resolved = Spec;

    fn to_valid(&self) -> Spec {
        Spec {
            version: self.version.unwrap_or_default(),
            projects: self.projects.iter().map(Resolvable::to_valid).collect(),
            workflows: self
                .workflows
                .iter()
                .map(|(name, raw)| (name.clone(), raw.to_valid_named(name)))
                .collect(),
        }
    }
}

impl Resolvable for RawProject {
    type Resolved = Project;

    fn to_valid(&self) -> Project {
        let workspace = match self.workspace.as_deref() {
            None | Some("") => DEFAULT_WORKSPACE.to_string(),
            Some(ws) => ws.to_string(),
        };

        Project {
            dir: clean_dir(self.dir.as_deref().unwrap_or_default()),
            workspace,
            name: self.name.clone(),
            workflow: self.workflow.clone(),
            terraform_version: self
                .terraform_version
                .as_deref()
                .and_then(|v| v.parse().ok()),
            autoplan: self
                .autoplan
                .as_ref()
                .map(Resolvable::to_valid)
                .unwrap_or_default(),
            apply_requirements: self
                .apply_requirements
                .iter()
                .filter_map(|r| r.parse().ok())
                .collect(),
        }
    }
}

impl Resolvable for RawAutoplan {
    type Resolved = Autoplan;

    fn to_valid(&self) -> Autoplan {
        let defaults = Autoplan::default();
        Autoplan {
            when_modified: self
                .when_modified
                .clone()
                .unwrap_or(defaults.when_modified),
            enabled: self.enabled.unwrap_or(defaults.enabled),
        }
    }
}

impl RawWorkflow {
    fn to_valid_named(&self, name: &str) -> Workflow {
        Workflow {
            name: name.to_string(),
            plan: self
                .plan
                .as_ref()
                .map(Resolvable::to_valid)
                .unwrap_or_else(Stage::default_plan),
            apply: self
                .apply
                .as_ref()
                .map(Resolvable::to_valid)
                .unwrap_or_else(Stage::default_apply),
        }
    }
}

impl Resolvable for RawStage {
    type Resolved = Stage;

    fn to_valid(&self) -> Stage {
        Stage {
            steps: self.steps.iter().filter_map(Resolvable::to_valid).collect(),
        }
    }
}

impl Resolvable for RawStep {
    /// `None` only for shapes the structural rules reject.
    type Resolved = Option<Step>;

    fn to_valid(&self) -> Option<Step> {
        match self {
            RawStep::Key(name) => Step::builtin(name, Vec::new()),
            RawStep::Args(map) => {
                let (name, args) = map.iter().next()?;
                let extra_args = args
                    .as_ref()
                    .and_then(|args| args.values().next().cloned())
                    .unwrap_or_default();
                Step::builtin(name, extra_args)
            }
            RawStep::Run(map) => map.values().next().map(|command| Step::Run {
                command: command.clone(),
            }),
        }
    }
}
