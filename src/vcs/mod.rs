//! Git integration.
//!
//! Gists are git repositories, so clone/commit/push go through the
//! external git tool rather than the API. Commands inherit the
//! terminal so that clone progress and commit-message prompts behave
//! as they would in a plain shell.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// SSH-style remote URL for a gist.
pub fn gist_url(id: &str) -> String {
    format!("git@gist.github.com:{id}.git")
}

/// Handle on the external git tool.
pub struct Git;

impl Git {
    /// Clones `url` into the working directory, optionally under `name`.
    pub fn clone(url: &str, name: Option<&str>, workdir: &Path) -> Result<()> {
        let mut command = Command::new("git");
        command.current_dir(workdir).arg("clone").arg(url);
        if let Some(name) = name {
            command.arg(name);
        }
        run(command)
    }

    /// Returns true when `repo` has modifications to tracked files.
    pub fn has_changes(repo: &Path) -> Result<bool> {
        let output = Command::new("git")
            .current_dir(repo)
            .args(["status", "--porcelain", "--untracked-files=no"])
            .output()
            .context("failed to run git")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git status failed: {}", stderr.trim());
        }
        Ok(!output.stdout.is_empty())
    }

    /// Commits all tracked changes in `repo`, interactively prompting
    /// for a message. The caller checks `has_changes` first, so a
    /// non-zero exit here is a real failure.
    pub fn commit_all(repo: &Path) -> Result<()> {
        let mut command = Command::new("git");
        command.current_dir(repo).args(["commit", "-a"]);
        run(command)
    }

    /// Pushes `repo` to its default remote.
    pub fn push(repo: &Path) -> Result<()> {
        let mut command = Command::new("git");
        command.current_dir(repo).arg("push");
        run(command)
    }
}

fn run(mut command: Command) -> Result<()> {
    debug!(?command, "running git");
    let status = command.status().context("failed to run git")?;
    if !status.success() {
        bail!("git exited with {status}");
    }
    Ok(())
}
