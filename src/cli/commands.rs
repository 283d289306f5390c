//! Command handlers and dispatch

use std::io::Write;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::error::AnalyticsResult;

/// Program name as shown by `--version` and completion scripts.
pub const PROG_NAME: &str = env!("CARGO_PKG_NAME");

/// Semantic version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatch a parsed invocation, writing command output to `out`.
///
/// `--version` wins over any subcommand. A missing subcommand is rejected
/// during parsing, so `None` here is a no-op.
pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> AnalyticsResult<()> {
    if cli.version {
        return version(out);
    }
    match &cli.command {
        Some(Commands::Start { config }) => start(config.as_deref(), out),
        Some(Commands::Status) => status(out),
        Some(Commands::Metrics { output }) => metrics(output, out),
        Some(Commands::Completion { shell }) => completion(*shell, out),
        None => Ok(()),
    }
}

fn version<W: Write>(out: &mut W) -> AnalyticsResult<()> {
    output::info(out, &format!("{}, version {}", PROG_NAME, VERSION))
}

/// The config path is echoed only; the file is never opened.
/// An empty path counts as no path.
#[instrument(skip(out))]
fn start<W: Write>(config: Option<&Path>, out: &mut W) -> AnalyticsResult<()> {
    debug!("config: {:?}", config);
    output::info(out, "Starting analytics worker...")?;
    match config.filter(|path| !path.as_os_str().is_empty()) {
        Some(path) => output::info(out, &format!("Using config: {}", path.display())),
        None => output::info(out, "Using default configuration"),
    }
}

#[instrument(skip(out))]
fn status<W: Write>(out: &mut W) -> AnalyticsResult<()> {
    output::info(out, "Analytics worker status: Ready")
}

/// Reports the target path; nothing is written there.
#[instrument(skip(out))]
fn metrics<W: Write>(output_path: &Path, out: &mut W) -> AnalyticsResult<()> {
    debug!("output: {:?}", output_path);
    output::info(out, &format!("Exporting metrics to {}", output_path.display()))
}

#[instrument(skip(out))]
fn completion<W: Write>(shell: Shell, out: &mut W) -> AnalyticsResult<()> {
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    generate(shell, &mut cmd, PROG_NAME, &mut script);
    output::raw(out, &script)
}
