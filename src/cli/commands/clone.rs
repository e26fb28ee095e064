//! Clone command - clone a gist to the current directory.
//!
//! Goes straight to the external git tool against the SSH-style gist
//! remote; no API call is made, so any gist (not just the caller's)
//! can be cloned.

use anyhow::Result;

use crate::vcs::{gist_url, Git};

/// Arguments for the clone command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier to clone
    pub id: String,

    /// Directory name for the clone (defaults to the gist id)
    pub name: Option<String>,
}

/// Executes the clone command.
pub fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    Git::clone(&gist_url(&args.id), args.name.as_deref(), &cwd)
}
