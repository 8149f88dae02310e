//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.

pub mod repo_config_reader;
pub mod schema;

pub use repo_config_reader::RepoConfigReader;
pub use schema::{Resolvable, Validatable, ValidationError};
