//! Configuration discovery and loading.
//!
//! Configuration lives in an INI-style file with a `[gist]` section.
//! Discovery checks, in increasing precedence: `~/.gist`,
//! `~/.config/gist`, `$XDG_DATA_HOME/gist`, and finally the path named
//! by `$GIST_CONFIG`. The file is read once per invocation and the
//! result treated as immutable for the run.
//!
//! The `token` value may be a literal, or a `!`-prefixed shell command
//! whose stdout supplies the token.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Errors raised while locating or reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to find config file")]
    NotFound,

    #[error("unable to load configuration file: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("missing 'token' field in configuration")]
    MissingToken,

    #[error("an empty token is not valid")]
    EmptyToken,

    #[error("{0} missing from config file")]
    MissingKey(&'static str),

    #[error("token command failed: {0}")]
    TokenCommand(String),
}

/// Key-value settings from the `[gist]` section of the config file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Config {
    /// Loads configuration from the discovered path.
    pub fn load() -> Result<Self, ConfigError> {
        let path = discover_path().ok_or(ConfigError::NotFound)?;
        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parses INI-style text, keeping only keys in the `[gist]` section.
    ///
    /// Both `key = value` and `key: value` separators are accepted;
    /// lines starting with `#` or `;` are comments.
    pub fn parse(text: &str) -> Self {
        let mut values = BTreeMap::new();
        let mut in_gist_section = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                in_gist_section = section.trim() == "gist";
                continue;
            }
            if !in_gist_section {
                continue;
            }
            if let Some((key, value)) = line.split_once(['=', ':']) {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { values }
    }

    /// Returns a raw setting value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the personal access token.
    ///
    /// A missing key and an empty value are distinct errors; a value
    /// starting with `!` is run as a shell command whose stdout is the
    /// token.
    pub fn token(&self) -> Result<String, ConfigError> {
        let value = self.get("token").ok_or(ConfigError::MissingToken)?.trim();
        if value.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        value_from_command(value)
    }

    /// Resolves the editor command.
    ///
    /// Precedence, lowest to highest: `/usr/bin/editor` when present,
    /// the `EDITOR` environment variable, the config file `editor` key.
    pub fn editor(&self) -> Option<String> {
        self.editor_with_env(std::env::var("EDITOR").ok().as_deref())
    }

    fn editor_with_env(&self, env_editor: Option<&str>) -> Option<String> {
        let mut editor = None;
        if Path::new("/usr/bin/editor").exists() {
            editor = Some("/usr/bin/editor".to_string());
        }
        if let Some(env) = env_editor {
            if !env.trim().is_empty() {
                editor = Some(env.trim().to_string());
            }
        }
        if let Some(configured) = self.get("editor") {
            editor = Some(configured.to_string());
        }
        editor
    }

    pub fn gnupg_homedir(&self) -> Option<&str> {
        self.get("gnupg-homedir")
    }

    pub fn gnupg_fingerprint(&self) -> Option<&str> {
        self.get("gnupg-fingerprint")
    }

    pub fn log_level(&self) -> Option<&str> {
        self.get("log-level")
    }

    /// Whether editor scratch files are removed after use. Defaults to true.
    pub fn delete_tempfiles(&self) -> bool {
        self.get("delete-tempfiles")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "no" | "off" | "0"))
            .unwrap_or(true)
    }
}

/// Returns the value, or runs it as a shell command when `!`-prefixed.
fn value_from_command(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    match value.strip_prefix('!') {
        None => Ok(value.to_string()),
        Some(command) => {
            let output = Command::new("sh")
                .arg("-c")
                .arg(command)
                .output()
                .map_err(|e| ConfigError::TokenCommand(e.to_string()))?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(ConfigError::TokenCommand(stderr));
            }
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
    }
}

/// Finds the config file, later candidates overriding earlier ones.
fn discover_path() -> Option<PathBuf> {
    let mut path = None;

    if let Some(home) = dirs::home_dir() {
        let candidate = home.join(".gist");
        if candidate.is_file() {
            path = Some(candidate);
        }
        let candidate = home.join(".config").join("gist");
        if candidate.is_file() {
            path = Some(candidate);
        }
    }

    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        let candidate = PathBuf::from(xdg).join("gist");
        if candidate.is_file() {
            path = Some(candidate);
        }
    }

    if let Some(explicit) = std::env::var_os("GIST_CONFIG") {
        let candidate = PathBuf::from(explicit);
        if candidate.is_file() {
            path = Some(candidate);
        }
    }

    path
}
