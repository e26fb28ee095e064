//! Editor integration.
//!
//! Launches the configured editor as an external collaborator. The
//! editor command may carry its own arguments (e.g. `code --wait`), so
//! it is run through the shell with the target paths appended.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Handle on the user's configured editor.
pub struct Editor {
    command: String,
}

impl Editor {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }

    /// Opens the given paths in the editor and blocks until it exits.
    pub fn launch(&self, paths: &[&Path]) -> Result<()> {
        let mut command_line = self.command.clone();
        for path in paths {
            command_line.push(' ');
            command_line.push_str(&shell_quote(&path.to_string_lossy()));
        }
        debug!(command = %command_line, "launching editor");

        let status = Command::new("sh")
            .arg("-c")
            .arg(&command_line)
            .status()
            .context("failed to launch editor")?;

        if !status.success() {
            bail!("editor exited with {status}");
        }
        Ok(())
    }
}

/// Single-quotes a path for the shell.
fn shell_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}
