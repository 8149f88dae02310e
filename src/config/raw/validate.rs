//! Structural rules for the raw config.
//!
//! Each rule looks at one value in isolation. Rules that need the whole
//! document live in `domain::services::cross_validator`.

use crate::config::SUPPORTED_VERSION;
use crate::domain::ports::{Validatable, ValidationError};
use crate::domain::value_objects::{is_url_safe_name, ApplyRequirement, TerraformVersion};

use super::{RawProject, RawSpec, RawStage, RawStep, RawWorkflow};

const EXTRA_ARGS_KEY: &str = "extra_args";
const RUN_STEP: &str = "run";
const BUILTIN_STEPS: &[&str] = &["init", "plan", "apply"];

impl Validatable for RawSpec {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.version {
            None => {
                return Err(ValidationError::new(format!(
                    "is required. If you've just upgraded Atlantis you need to rewrite your \
                     atlantis.yaml for version {}",
                    SUPPORTED_VERSION
                ))
                .within("version"))
            }
            Some(v) if v != SUPPORTED_VERSION => {
                return Err(ValidationError::new(format!(
                    "only version {} is supported",
                    SUPPORTED_VERSION
                ))
                .within("version"))
            }
            Some(_) => {}
        }

        for (i, project) in self.projects.iter().enumerate() {
            project
                .validate()
                .map_err(|e| e.within(format!("[{}]", i)).within("projects"))?;
        }

        for (name, workflow) in &self.workflows {
            workflow
                .validate()
                .map_err(|e| e.within(name.as_str()).within("workflows"))?;
        }

        Ok(())
    }
}

impl Validatable for RawProject {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.dir.as_deref() {
            None | Some("") => return Err(ValidationError::new("cannot be blank").within("dir")),
            Some(dir) if dir.contains("..") => {
                return Err(ValidationError::new("cannot contain '..'").within("dir"))
            }
            Some(_) => {}
        }

        for requirement in &self.apply_requirements {
            requirement
                .parse::<ApplyRequirement>()
                .map_err(|msg| ValidationError::new(msg).within("apply_requirements"))?;
        }

        if let Some(version) = &self.terraform_version {
            version
                .parse::<TerraformVersion>()
                .map_err(|e| ValidationError::new(e.to_string()).within("terraform_version"))?;
        }

        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(ValidationError::new("if set cannot be empty").within("name"));
            }
            if !is_url_safe_name(name) {
                return Err(ValidationError::new(format!(
                    "{:?} is not allowed: must contain only URL safe characters",
                    name
                ))
                .within("name"));
            }
        }

        Ok(())
    }
}

impl Validatable for RawWorkflow {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(plan) = &self.plan {
            plan.validate().map_err(|e| e.within("plan"))?;
        }
        if let Some(apply) = &self.apply {
            apply.validate().map_err(|e| e.within("apply"))?;
        }
        Ok(())
    }
}

impl Validatable for RawStage {
    fn validate(&self) -> Result<(), ValidationError> {
        for (i, step) in self.steps.iter().enumerate() {
            step.validate()
                .map_err(|e| e.within(format!("[{}]", i)).within("steps"))?;
        }
        Ok(())
    }
}

impl Validatable for RawStep {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            RawStep::Key(key) => builtin_step_name(key),
            RawStep::Args(map) => {
                single_key(map.keys())?;
                for (step, args) in map {
                    builtin_step_name(step)?;
                    let Some(args) = args else {
                        continue;
                    };
                    if args.len() > 1 {
                        return Err(ValidationError::new(format!(
                            "built-in steps only support a single {} key, found {}: {}",
                            EXTRA_ARGS_KEY,
                            args.len(),
                            join_keys(args.keys())
                        )));
                    }
                    if let Some(key) = args.keys().find(|k| *k != EXTRA_ARGS_KEY) {
                        return Err(ValidationError::new(format!(
                            "built-in steps only support a single {} key, found {:?} in step {}",
                            EXTRA_ARGS_KEY, key, step
                        )));
                    }
                }
                Ok(())
            }
            RawStep::Run(map) => {
                single_key(map.keys())?;
                match map.keys().find(|k| *k != RUN_STEP) {
                    Some(other) => Err(ValidationError::new(format!(
                        "{:?} is not a valid step type",
                        other
                    ))),
                    None => Ok(()),
                }
            }
        }
    }
}

fn builtin_step_name(name: &str) -> Result<(), ValidationError> {
    if BUILTIN_STEPS.contains(&name) {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "{:?} is not a valid step type",
            name
        )))
    }
}

/// A step map carries exactly one key: the step's name.
fn single_key<'a>(keys: impl ExactSizeIterator<Item = &'a String>) -> Result<(), ValidationError> {
    match keys.len() {
        0 => Err(ValidationError::new("step element is empty")),
        1 => Ok(()),
        n => Err(ValidationError::new(format!(
            "step element can only contain a single key, found {}: {}",
            n,
            join_keys(keys)
        ))),
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.map(String::as_str).collect::<Vec<_>>().join(",")
}
