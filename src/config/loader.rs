//! Manifest loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

use super::ATLANTIS_YAML_FILENAME;

/// Location of the manifest for `repo_dir`.
pub fn config_path(repo_dir: &Path) -> PathBuf {
    repo_dir.join(ATLANTIS_YAML_FILENAME)
}

/// Read the raw manifest bytes.
///
/// A missing file yields an error for which
/// [`ConfigError::is_not_found`] is true; callers typically fall back to
/// defaults in that case.
pub fn read_manifest(repo_dir: &Path) -> ConfigResult<Vec<u8>> {
    let path = config_path(repo_dir);
    debug!(path = %path.display(), "reading repo config");

    fs::read(&path).map_err(|e| io_error(repo_dir, e))
}

/// Whether a manifest exists in `repo_dir`.
pub fn has_config(repo_dir: &Path) -> ConfigResult<bool> {
    match fs::metadata(config_path(repo_dir)) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(repo_dir, e)),
    }
}

fn io_error(repo_dir: &Path, source: io::Error) -> ConfigError {
    if source.kind() == io::ErrorKind::NotFound {
        ConfigError::NotFound {
            file: ATLANTIS_YAML_FILENAME,
            dir: repo_dir.to_path_buf(),
            source,
        }
    } else {
        ConfigError::Read {
            file: ATLANTIS_YAML_FILENAME,
            source,
        }
    }
}
