//! Content command - print gist file content to the terminal.
//!
//! With a filename argument only that file's content is printed, bare.
//! Otherwise every file is printed as a `name:` header followed by its
//! content. `--decrypt` pipes content through gpg first.

use anyhow::Result;

use crate::cli::commands;
use crate::config::{Config, ConfigError};
use crate::crypto::Gpg;

/// Arguments for the content command.
#[derive(clap::Args)]
pub struct Args {
    /// Gist identifier
    pub id: String,

    /// Only print the content of this file
    pub filename: Option<String>,

    /// Decrypt content with gpg before printing
    #[arg(long)]
    pub decrypt: bool,
}

/// Executes the content command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let content = client.content(&args.id)?;
    let selected = args.filename.as_deref().and_then(|name| content.get(name));

    if args.decrypt {
        let homedir = config
            .gnupg_homedir()
            .ok_or(ConfigError::MissingKey("gnupg-homedir"))?;
        let gpg = Gpg::new(homedir, config.gnupg_fingerprint());

        match selected {
            Some(text) => println!("{}", gpg.decrypt(text)?),
            None => {
                for (name, text) in &content {
                    println!("{} (decrypted):\n{}\n", name, gpg.decrypt(text)?);
                }
            }
        }
    } else {
        match selected {
            Some(text) => println!("{text}"),
            None => {
                for (name, text) in &content {
                    println!("{name}:\n{text}\n");
                }
            }
        }
    }

    Ok(())
}
