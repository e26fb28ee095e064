//! Create command - upload a new gist.
//!
//! Content comes from a piped stdin, explicit file paths, or a scratch
//! file opened in the editor, in that order of preference. Files are
//! optionally encrypted through gpg before upload.

use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::api::FileInfo;
use crate::cli::commands;
use crate::config::{Config, ConfigError};
use crate::crypto::{Gpg, ENCRYPTED_SUFFIX};
use crate::editor::Editor;

/// Default filename for stdin and editor content.
const DEFAULT_FILENAME: &str = "file1.txt";

/// Arguments for the create command.
#[derive(clap::Args)]
pub struct Args {
    /// Description for the new gist
    pub desc: String,

    /// Existing files to upload
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Make the gist publicly visible
    #[arg(long)]
    pub public: bool,

    /// Encrypt file content with gpg before uploading
    #[arg(long)]
    pub encrypt: bool,

    /// Name for the single stdin/editor file (default: file1.txt)
    #[arg(long)]
    pub filename: Option<String>,
}

/// Executes the create command and prints the new gist's URL.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;

    // Encryption must be possible before any file I/O happens.
    if args.encrypt {
        check_encryption_settings(&config)?;
    }

    if args.filename.is_some() && !args.files.is_empty() {
        bail!("--filename is incompatible with a list of existing files");
    }

    let files = gather_files(&args, &config)?;
    ensure_nonempty(&files)?;

    let payload = if args.encrypt {
        encrypt_files(&config, files)?
    } else {
        files
            .into_iter()
            .map(|file| (file.name, file.content))
            .collect()
    };

    let client = commands::client(&config)?;
    let url = client.create(&args.desc, &payload, args.public)?;
    println!("{url}");
    Ok(())
}

/// Fails fast when the config cannot support encryption.
pub fn check_encryption_settings(config: &Config) -> Result<(), ConfigError> {
    if config.gnupg_homedir().is_none() {
        return Err(ConfigError::MissingKey("gnupg-homedir"));
    }
    if config.gnupg_fingerprint().is_none() {
        return Err(ConfigError::MissingKey("gnupg-fingerprint"));
    }
    Ok(())
}

/// Rejects any zero-length file before a request is issued.
pub fn ensure_nonempty(files: &[FileInfo]) -> Result<()> {
    for file in files {
        if file.content.is_empty() {
            bail!("'{}' is empty", file.name);
        }
    }
    Ok(())
}

/// Where gist content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentSource {
    Stdin,
    Files,
    Editor,
}

/// Picks the content source. A piped stdin always wins; explicit file
/// paths are only read when stdin is a terminal; the editor is the
/// fallback when neither applies.
fn content_source(stdin_is_tty: bool, files_given: bool) -> ContentSource {
    if !stdin_is_tty {
        ContentSource::Stdin
    } else if files_given {
        ContentSource::Files
    } else {
        ContentSource::Editor
    }
}

/// Collects gist content from stdin, files, or the editor.
fn gather_files(args: &Args, config: &Config) -> Result<Vec<FileInfo>> {
    let source = content_source(io::stdin().is_terminal(), !args.files.is_empty());

    if source == ContentSource::Files {
        debug!("reading from files");
        return args
            .files
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .with_context(|| format!("'{}' is not a file", path.display()))?
                    .to_string_lossy()
                    .to_string();
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("unable to read '{}'", path.display()))?;
                Ok(FileInfo::new(name, content))
            })
            .collect();
    }

    let name = args
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    if source == ContentSource::Stdin {
        debug!("reading from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(vec![FileInfo::new(name, content)]);
    }

    debug!("reading from editor");
    let editor = Editor::new(&config.editor().context("unable to find an editor")?);
    let scratch = NamedTempFile::new()?;
    editor.launch(&[scratch.path()])?;
    let content = std::fs::read_to_string(scratch.path())?;

    if !config.delete_tempfiles() {
        let (_, path) = scratch.keep()?;
        debug!(path = %path.display(), "kept scratch file");
    }

    Ok(vec![FileInfo::new(name, content)])
}

/// Encrypts each file, suffixing the name to mark ciphertext.
fn encrypt_files(config: &Config, files: Vec<FileInfo>) -> Result<BTreeMap<String, String>> {
    let homedir = config
        .gnupg_homedir()
        .ok_or(ConfigError::MissingKey("gnupg-homedir"))?;
    let gpg = Gpg::new(homedir, config.gnupg_fingerprint());

    files
        .into_iter()
        .map(|file| {
            let cipher = gpg.encrypt(&file.content)?;
            Ok((format!("{}{}", file.name, ENCRYPTED_SUFFIX), cipher))
        })
        .collect()
}
