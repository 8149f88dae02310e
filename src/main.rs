//! atlantis-yaml CLI - validate a repo's atlantis.yaml
//!
//! Usage: atlantis-yaml <COMMAND>
//!
//! Commands:
//!   check   Read and validate atlantis.yaml, then print the resolved projects

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { repo_dir } => commands::check::cmd_check(&repo_dir, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level one step at a time.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
