//! Delete command - permanently remove gists.

use anyhow::Result;
use tracing::debug;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the delete command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifiers to delete
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

/// Executes the delete command. Success is silent.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    for id in &args.ids {
        debug!(id, "deleting gist");
        client.delete(id)?;
    }
    Ok(())
}
