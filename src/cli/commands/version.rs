//! Version command - print the client version.

use anyhow::Result;

/// Arguments for the version command.
#[derive(clap::Args)]
pub struct Args {}

/// Executes the version command.
pub fn run(_args: Args) -> Result<()> {
    println!("v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
