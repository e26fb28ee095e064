//! CLI commands for gist.
//!
//! Each submodule implements a single subcommand with its argument
//! shape and execution logic.

/// Download a gist as a tar.gz archive.
pub mod archive;

/// Clone a gist with git.
pub mod clone;

/// Print gist file content, optionally decrypted.
pub mod content;

/// Create a new gist from files, stdin, or the editor.
pub mod create;

/// Delete gists.
pub mod delete;

/// Update a gist description.
pub mod description;

/// Edit a gist in place via clone, editor, commit, push.
pub mod edit;

/// List the filenames in a gist.
pub mod files;

/// Fork a gist.
pub mod fork;

/// Dump a gist resource as JSON.
pub mod info;

/// List the caller's gists.
pub mod list;

/// Print the client version.
pub mod version;

use anyhow::Result;

use crate::api::GistClient;
use crate::config::Config;

/// Builds an authenticated client from loaded configuration.
pub fn client(config: &Config) -> Result<GistClient> {
    let token = config.token()?;
    Ok(GistClient::new(&token))
}
