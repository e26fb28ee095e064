//! Fork command - create a fork of a gist.

use anyhow::Result;
use tracing::debug;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the fork command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier to fork
    pub id: String,
}

/// Executes the fork command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let fork = client.fork(&args.id)?;
    debug!(id = %args.id, new = ?fork.get("id"), "forked gist");
    Ok(())
}
