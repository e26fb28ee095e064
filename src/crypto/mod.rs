//! Encryption pass-through.
//!
//! Gist content encryption is not implemented here; it is delegated to
//! the external `gpg` tool configured by the `gnupg-homedir` and
//! `gnupg-fingerprint` settings. Armored ciphertext travels as ordinary
//! gist file content, with an `.asc` suffix on the filename to signal
//! that a file holds ciphertext.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Suffix appended to filenames carrying encrypted content.
pub const ENCRYPTED_SUFFIX: &str = ".asc";

/// Handle on the external gpg tool.
pub struct Gpg {
    homedir: String,
    fingerprint: Option<String>,
}

impl Gpg {
    /// Creates a gpg handle. The fingerprint selects the recipient for
    /// encryption and may be omitted when only decrypting.
    pub fn new(homedir: &str, fingerprint: Option<&str>) -> Self {
        Self {
            homedir: homedir.to_string(),
            fingerprint: fingerprint.map(str::to_string),
        }
    }

    /// Encrypts plaintext for the configured recipient, returning
    /// armored ciphertext.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let fingerprint = self
            .fingerprint
            .as_deref()
            .context("no gnupg fingerprint configured")?;

        self.run(
            &[
                "--encrypt",
                "--armor",
                "--batch",
                "--trust-model",
                "always",
                "--recipient",
                fingerprint,
            ],
            plaintext,
        )
    }

    /// Decrypts armored ciphertext back to plaintext.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.run(&["--decrypt", "--batch", "--quiet"], ciphertext)
    }

    /// Runs gpg with content on stdin, returning its stdout.
    fn run(&self, args: &[&str], input: &str) -> Result<String> {
        let mut child = Command::new("gpg")
            .arg("--homedir")
            .arg(&self.homedir)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to run gpg")?;

        child
            .stdin
            .take()
            .context("failed to open gpg stdin")?
            .write_all(input.as_bytes())
            .context("failed to write to gpg")?;

        let output = child.wait_with_output().context("gpg did not exit")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("gpg failed: {}", stderr.trim());
        }

        String::from_utf8(output.stdout).context("gpg produced non-UTF-8 output")
    }
}
