//! List command - show the caller's gists, one line each.

use anyhow::Result;
use colored::Colorize;

use crate::api::GistList;
use crate::cli::commands;
use crate::cli::format::{elide, summary_line, terminal_width};
use crate::config::Config;

/// Arguments for the list command.
#[derive(clap::Args)]
pub struct Args {}

/// Executes the list command.
///
/// Prints `<id> <+|-> <description>` for every gist, elided to the
/// terminal width. A pagination failure yields whatever was fetched,
/// plus a notice on stderr.
pub fn run(_args: Args) -> Result<()> {
    let config = Config::load()?;
    let client = commands::client(&config)?;

    let list = client.list();
    let width = terminal_width();
    for gist in &list.gists {
        println!("{}", elide(&summary_line(gist), width));
    }

    if let Some(notice) = truncation_notice(&list) {
        eprintln!("{}", notice.yellow());
    }

    Ok(())
}

/// Stderr notice for a listing that ended before the last page.
fn truncation_notice(list: &GistList) -> Option<&'static str> {
    list.truncated
        .then_some("warning: listing ended early; some gists may be missing")
}
