//! Error types for the repo config reader
//!
//! Uses `thiserror` for library errors. Every failure carries an
//! [`ErrorKind`] so callers can branch on what went wrong without matching
//! on messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::ValidationError;
use crate::domain::services::CrossValidationError;

/// Result type alias for config reads
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What class of failure an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No config file in the repo.
    NotFound,
    /// The file exists but could not be read.
    ReadFailure,
    /// Malformed YAML or an unknown key.
    DecodeFailure,
    /// A field-level rule failed.
    ValidationFailure,
    /// A project names a workflow that is not defined.
    WorkflowReferenceFailure,
    /// Duplicate project name, or an unnamed dir/workspace collision.
    IdentityConflictFailure,
}

impl ErrorKind {
    /// Stable snake_case name, used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::ReadFailure => "read_failure",
            ErrorKind::DecodeFailure => "decode_failure",
            ErrorKind::ValidationFailure => "validation_failure",
            ErrorKind::WorkflowReferenceFailure => "workflow_reference_failure",
            ErrorKind::IdentityConflictFailure => "identity_conflict_failure",
        }
    }
}

/// Main error type for reading a repo config
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file does not exist
    #[error("{file} not found in {}", .dir.display())]
    NotFound {
        file: &'static str,
        dir: PathBuf,
        source: io::Error,
    },

    /// The config file exists but could not be read
    #[error("unable to read {file} file: {source}")]
    Read {
        file: &'static str,
        source: io::Error,
    },

    /// The config file was read but is not a valid config
    #[error("parsing {file}: {source}")]
    Parse {
        file: &'static str,
        source: ParseError,
    },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::NotFound { .. } => ErrorKind::NotFound,
            ConfigError::Read { .. } => ErrorKind::ReadFailure,
            ConfigError::Parse { source, .. } => source.kind(),
        }
    }

    /// True only when the repo has no config file at all.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Failures after the file has been read.
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML syntax error, type mismatch or unknown key
    #[error("{source}{}", .suggestion.as_ref().map(|s| format!(" (did you mean `{}`?)", s)).unwrap_or_default())]
    Decode {
        source: serde_yaml_ng::Error,
        suggestion: Option<String>,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    CrossValidation(#[from] CrossValidationError),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Decode { .. } => ErrorKind::DecodeFailure,
            ParseError::Validation(_) => ErrorKind::ValidationFailure,
            ParseError::CrossValidation(CrossValidationError::UndefinedWorkflow { .. }) => {
                ErrorKind::WorkflowReferenceFailure
            }
            ParseError::CrossValidation(_) => ErrorKind::IdentityConflictFailure,
        }
    }

    /// 1-indexed line of a decode failure, when the parser reported one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Decode { source, .. } => source.location().map(|l| l.line()),
            _ => None,
        }
    }
}

/// True if any error in `err`'s source chain is a missing-config error.
///
/// For callers that have already wrapped a [`ConfigError`] (e.g. in
/// `anyhow::Error`).
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(config_err) = e.downcast_ref::<ConfigError>() {
            return config_err.is_not_found();
        }
        current = e.source();
    }
    false
}
