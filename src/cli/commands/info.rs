//! Info command - dump the raw gist resource as JSON.

use anyhow::Result;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the info command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier
    pub id: String,
}

/// Executes the info command. Mostly useful for debugging.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let info = client.info(&args.id)?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
