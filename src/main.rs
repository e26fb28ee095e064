use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gist_cli::cli::commands;
use gist_cli::config::Config;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "gist")]
#[command(version)]
#[command(about = "A command line interface for GitHub gists")]
#[command(long_about = "gist provides a command line interface for interacting with\n\
    GitHub gists: listing, creating, editing, forking, deleting,\n\
    archiving, and printing gist content.")]
#[command(after_help = "EXAMPLES:\n    \
    gist list                            List your gists\n    \
    gist create \"description\" foo.txt    Create a gist from a file\n    \
    echo hi | gist create \"description\"  Create a gist from stdin\n    \
    gist content c971fca7997aed65ddc9    Print a gist's content\n    \
    gist edit c971fca7997aed65ddc9       Edit a gist in your editor\n    \
    gist clone c971fca7997aed65ddc9      Clone a gist with git\n\n\
    For more information about a command, run 'gist <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List your gists as '<id> <+|-> <description>' lines
    List(commands::list::Args),

    /// Clone a gist, edit it, then commit and push the changes
    Edit(commands::edit::Args),

    /// Update the description of a gist
    Description(commands::description::Args),

    /// Dump all information about a gist as JSON
    Info(commands::info::Args),

    /// Create a fork of a gist
    Fork(commands::fork::Args),

    /// List the files in a gist
    Files(commands::files::Args),

    /// Delete gists
    Delete(commands::delete::Args),

    /// Download a gist into a <id>.tar.gz archive
    Archive(commands::archive::Args),

    /// Print the content of each file in a gist
    Content(commands::content::Args),

    /// Create a new gist from files, stdin, or your editor
    Create(commands::create::Args),

    /// Clone a gist to the current directory
    Clone(commands::clone::Args),

    /// Print the gist client version
    Version(commands::version::Args),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and --version print to stdout and exit cleanly;
            // usage errors exit 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Edit(args) => commands::edit::run(args),
        Commands::Description(args) => commands::description::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Fork(args) => commands::fork::run(args),
        Commands::Files(args) => commands::files::run(args),
        Commands::Delete(args) => commands::delete::run(args),
        Commands::Archive(args) => commands::archive::run(args),
        Commands::Content(args) => commands::content::run(args),
        Commands::Create(args) => commands::create::run(args),
        Commands::Clone(args) => commands::clone::run(args),
        Commands::Version(args) => commands::version::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {e:#}", "ERROR:".red());
        std::process::exit(1);
    }
}

/// Initializes logging.
///
/// Precedence: `--verbose`, then the `GIST_LOG` environment variable,
/// then the config file's `log-level` key, then errors only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "gist_cli=debug".to_string()
    } else if let Ok(env) = std::env::var("GIST_LOG") {
        env
    } else if let Some(level) = configured_log_level() {
        format!("gist_cli={level}")
    } else {
        "gist_cli=error".to_string()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn configured_log_level() -> Option<String> {
    Config::load()
        .ok()?
        .log_level()
        .map(|level| level.to_lowercase())
}
