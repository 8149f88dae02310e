//! Workflow entity
//!
//! A workflow is a named pair of stages (plan, apply), each an ordered list of
//! steps. The reader never runs steps; it only resolves what they would be.

use serde::Serialize;

/// A single resolved step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum Step {
    Init { extra_args: Vec<String> },
    Plan { extra_args: Vec<String> },
    Apply { extra_args: Vec<String> },
    Run { command: String },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Init { .. } => "init",
            Step::Plan { .. } => "plan",
            Step::Apply { .. } => "apply",
            Step::Run { .. } => "run",
        }
    }

    /// Builds a built-in step by name. Returns `None` for anything else.
    pub fn builtin(name: &str, extra_args: Vec<String>) -> Option<Self> {
        match name {
            "init" => Some(Step::Init { extra_args }),
            "plan" => Some(Step::Plan { extra_args }),
            "apply" => Some(Step::Apply { extra_args }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub steps: Vec<Step>,
}

impl Stage {
    /// `init` followed by `plan`.
    pub fn default_plan() -> Self {
        Self {
            steps: vec![
                Step::Init {
                    extra_args: Vec::new(),
                },
                Step::Plan {
                    extra_args: Vec::new(),
                },
            ],
        }
    }

    /// A lone `apply`.
    pub fn default_apply() -> Self {
        Self {
            steps: vec![Step::Apply {
                extra_args: Vec::new(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub name: String,
    pub plan: Stage,
    pub apply: Stage,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plan: Stage::default_plan(),
            apply: Stage::default_apply(),
        }
    }
}
