//! dirtree - mirror a directory subtree and list it depth-first.
//!
//! Usage:
//!   dirtree [PATH]               List PATH (prompts for it when omitted)
//!   dirtree --human --summary    Human-readable sizes plus totals
//!   dirtree --format json PATH   Emit the listing as JSON
//!   dirtree --help               Show help

mod input;
mod report;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use dirtree_scan::{ScanConfig, Scanner};

use crate::report::{OutputFormat, ReportOptions};

/// Printed when the root path does not name an existing directory.
const INVALID_PATH_MESSAGE: &str = "Invalid directory path.";

#[derive(Parser)]
#[command(
    name = "dirtree",
    version,
    about = "List a directory subtree depth-first",
    long_about = "dirtree mirrors a directory and everything below it into a tree, \
                  then prints one line per entry: size, modification date, name \
                  and kind. Parents are always listed before their contents."
)]
struct Cli {
    /// Directory to list (prompted for on stdin when omitted)
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Show sizes in human-readable units
    #[arg(short = 'H', long)]
    human: bool,

    /// Print file and directory totals after the listing
    #[arg(short, long)]
    summary: bool,

    /// Report symbolic links as links instead of following them
    #[arg(long)]
    no_follow: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match cli.path {
        Some(path) => path,
        None => input::read_root_path(io::stdin().lock(), io::stdout().lock())
            .context("Failed to read directory path")?,
    };

    let Ok(config) = ScanConfig::builder()
        .root(path)
        .follow_symlinks(!cli.no_follow)
        .build()
    else {
        println!("{INVALID_PATH_MESSAGE}");
        return Ok(());
    };

    let scanned = match Scanner::new().scan(&config) {
        Ok(scanned) => scanned,
        Err(err) if err.is_invalid_root() => {
            debug!(error = %err, "rejected root path");
            println!("{INVALID_PATH_MESSAGE}");
            return Ok(());
        }
        Err(err) => return Err(err).context("Scan failed"),
    };

    let options = ReportOptions {
        format: cli.format,
        human_sizes: cli.human,
        summary: cli.summary,
    };
    report::render(io::stdout().lock(), &scanned, &options)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Fails only when a global subscriber is already installed.
    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}
