//! Repo config module
//!
//! Reads `atlantis.yaml` from a repository checkout:
//! 1. load the file (missing vs unreadable are distinct errors)
//! 2. strict decode into the raw form
//! 3. structural validation
//! 4. workflow references
//! 5. resolution (defaults)
//! 6. project identity rules
//!
//! Any failure stops the pipeline and no partial `Spec` is returned.

mod loader;
mod parser_validator;
pub mod raw;
pub mod suggest;

pub use loader::{config_path, has_config, read_manifest};
pub use parser_validator::{read_config, ParserValidator};
pub use raw::{RawAutoplan, RawProject, RawSpec, RawStage, RawStep, RawWorkflow};

/// Name of the config file in each repo.
pub const ATLANTIS_YAML_FILENAME: &str = "atlantis.yaml";

/// The only manifest version this reader understands.
pub const SUPPORTED_VERSION: i64 = 2;
