//! Files command - list the filenames in a gist.

use anyhow::Result;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the files command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier
    pub id: String,
}

/// Executes the files command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    for name in client.files(&args.id)? {
        println!("{name}");
    }
    Ok(())
}
