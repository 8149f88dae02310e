//! Value Objects
//!
//! Immutable types that are defined by their attributes rather than identity.

mod apply_requirement;
mod project_dir;
mod project_name;
mod terraform_version;

pub use apply_requirement::ApplyRequirement;
pub use project_dir::clean_dir;
pub use project_name::is_url_safe_name;
pub use terraform_version::{TerraformVersion, VersionParseError};
