//! Isolated repo checkout for running the CLI against.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Result of running an atlantis-yaml CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temp directory standing in for a repo checkout.
pub struct TestRepo {
    pub root: TempDir,
}

impl TestRepo {
    /// A repo with no atlantis.yaml
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp repo"),
        }
    }

    /// A repo whose atlantis.yaml holds `content`
    pub fn with_config(content: &str) -> Self {
        let repo = Self::empty();
        std::fs::write(repo.root.path().join("atlantis.yaml"), content)
            .expect("write atlantis.yaml");
        repo
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Run the CLI with `args`, pointing `--repo-dir` at this repo.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_atlantis-yaml"))
            .args(args)
            .arg("--repo-dir")
            .arg(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("run atlantis-yaml");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
