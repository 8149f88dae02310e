//! Repo config reader port - abstracts where a repo's `Spec` comes from.

use std::path::Path;

use crate::domain::entities::Spec;
use crate::error::ConfigResult;

/// Reads the config for a repository checkout.
///
/// Consumers depend on this trait so tests can hand them a fixed `Spec`
/// without writing files.
pub trait RepoConfigReader: Send + Sync {
    /// Load the config for `repo_dir`.
    ///
    /// A missing config must be reported with an error whose
    /// `is_not_found()` is true.
    fn read_config(&self, repo_dir: &Path) -> ConfigResult<Spec>;
}
