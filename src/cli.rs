use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// atlantis-yaml - validate a repo's atlantis.yaml
#[derive(Parser, Debug)]
#[command(name = "atlantis-yaml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read and validate atlantis.yaml, then print the resolved projects
    Check {
        /// Repository checkout containing atlantis.yaml
        #[arg(short, long, default_value = ".")]
        repo_dir: PathBuf,
    },
}
