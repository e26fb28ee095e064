//! Edit command - edit a gist in place.
//!
//! The gist is cloned into a temporary directory, its files are opened
//! in the configured editor, and on confirmation the changes are
//! committed and pushed. The temporary directory is removed whatever
//! happens (tempdir drop guard).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::editor::Editor;
use crate::vcs::{gist_url, Git};

/// Arguments for the edit command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier to edit
    pub id: String,
}

/// Executes the edit command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let editor = Editor::new(&config.editor().context("unable to find an editor")?);

    let tempdir = tempfile::tempdir()?;
    Git::clone(&gist_url(&args.id), None, tempdir.path())?;
    let repo = tempdir.path().join(&args.id);

    let paths = working_files(&repo)?;
    editor.launch(&paths.iter().map(PathBuf::as_path).collect::<Vec<_>>())?;

    print!("Commit and push changes? [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if !input.trim().eq_ignore_ascii_case("y") {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    if !Git::has_changes(&repo)? {
        println!("{}", "No changes".dimmed());
        return Ok(());
    }

    Git::commit_all(&repo)?;
    Git::push(&repo)?;
    Ok(())
}

/// Returns the gist's working files, skipping the `.git` directory.
fn working_files(repo: &std::path::Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(repo)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}
