//! atlantis-yaml - reader and validator for per-repo `atlantis.yaml` files
//!
//! A repo config lists projects (a directory plus a Terraform workspace) and
//! the workflows that plan and apply them. [`read_config`] loads the file from
//! a repo checkout, rejects anything malformed or ambiguous, and returns a
//! fully defaulted [`Spec`].

pub mod config;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use config::{has_config, read_config, ParserValidator, RawSpec, ATLANTIS_YAML_FILENAME};
pub use domain::entities::{Autoplan, Project, Spec, Stage, Step, Workflow};
pub use domain::ports::{RepoConfigReader, Resolvable, Validatable, ValidationError};
pub use domain::services::CrossValidationError;
pub use domain::value_objects::{ApplyRequirement, TerraformVersion};
pub use error::{is_not_found, ConfigError, ConfigResult, ErrorKind, ParseError};
