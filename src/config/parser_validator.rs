//! Parse → validate → resolve → cross-validate

use std::path::Path;

use tracing::debug;

use crate::domain::entities::Spec;
use crate::domain::ports::{RepoConfigReader, Resolvable, Validatable};
use crate::domain::services::{validate_project_names, validate_workflows};
use crate::error::{ConfigError, ConfigResult, ParseError};

use super::loader::read_manifest;
use super::raw::{RawSpec, KNOWN_KEYS};
use super::suggest::closest;
use super::ATLANTIS_YAML_FILENAME;

/// Reads and validates `atlantis.yaml`. Stateless; one value can serve any
/// number of repos and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserValidator;

impl ParserValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the parsed and validated config for `repo_dir`.
    ///
    /// If there is no config file, the error satisfies
    /// [`ConfigError::is_not_found`].
    pub fn read_config(&self, repo_dir: &Path) -> ConfigResult<Spec> {
        let data = read_manifest(repo_dir)?;
        self.parse_and_validate(&data)
            .map_err(|source| ConfigError::Parse {
                file: ATLANTIS_YAML_FILENAME,
                source,
            })
    }

    /// Runs every stage after loading on raw manifest bytes.
    pub fn parse_and_validate(&self, data: &[u8]) -> Result<Spec, ParseError> {
        let raw = decode(data)?;

        raw.validate()?;
        validate_workflows(&raw)?;

        let spec = raw.to_valid();
        validate_project_names(&spec)?;

        debug!(
            version = spec.version,
            projects = spec.projects.len(),
            workflows = spec.workflows.len(),
            "repo config is valid"
        );
        Ok(spec)
    }
}

impl RepoConfigReader for ParserValidator {
    fn read_config(&self, repo_dir: &Path) -> ConfigResult<Spec> {
        ParserValidator::read_config(self, repo_dir)
    }
}

/// Reads `atlantis.yaml` from `repo_dir` with a default [`ParserValidator`].
pub fn read_config(repo_dir: &Path) -> ConfigResult<Spec> {
    ParserValidator::new().read_config(repo_dir)
}

fn decode(data: &[u8]) -> Result<RawSpec, ParseError> {
    // An empty file is an empty document, not a syntax error.
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawSpec::default());
    }

    serde_yaml_ng::from_slice(data).map_err(|source| {
        let suggestion = unknown_field(&source.to_string())
            .and_then(|key| closest(&key, KNOWN_KEYS))
            .map(str::to_string);
        ParseError::Decode { source, suggestion }
    })
}

/// Pulls the offending key out of an "unknown field `x`, expected ..." message.
fn unknown_field(message: &str) -> Option<String> {
    let rest = message.split_once("unknown field `")?.1;
    let (key, _) = rest.split_once('`')?;
    Some(key.to_string())
}
