//! Archive command - download a gist into `<id>.tar.gz`.

use anyhow::Result;
use tracing::debug;

use crate::cli::commands;
use crate::config::Config;

/// Arguments for the archive command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier to archive
    pub id: String,
}

/// Executes the archive command.
///
/// Writes a gzip-compressed tarball of the gist's files into the
/// current working directory.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let cwd = std::env::current_dir()?;
    let path = client.archive(&args.id, &cwd)?;
    debug!(path = %path.display(), "wrote archive");
    Ok(())
}
