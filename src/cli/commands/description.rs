//! Description command - update a gist's description.

use anyhow::Result;
use tracing::debug;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the description command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier
    pub id: String,

    /// New description text
    pub desc: String,
}

/// Executes the description command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let url = client.description(&args.id, &args.desc)?;
    debug!(id = %args.id, %url, "updated description");
    Ok(())
}
