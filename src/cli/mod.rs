//! CLI layer: argument parsing, command dispatch and exit codes

pub mod args;
pub mod commands;
pub mod output;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

pub use args::{Cli, Commands};
pub use commands::execute_command;

use crate::config::Settings;
use crate::{exitcode, logging};

/// Parse arguments, rejecting invocations that name no subcommand.
pub fn parse<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if !cli.version && cli.command.is_none() {
        let mut cmd = Cli::command();
        return Err(cmd.error(ErrorKind::MissingSubcommand, "a subcommand is required"));
    }
    Ok(cli)
}

/// Run one invocation end to end and return the process exit code.
///
/// Command output goes to `out`; usage errors, warnings and runtime errors
/// go to `err`. Help and version requests rendered by clap land on `out`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match parse(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let settings = Settings::load().unwrap_or_else(|e| {
        let _ = output::warning(err, &format!("{}; using default settings", e));
        Settings::default()
    });
    logging::init(cli.debug, &settings);
    debug!("cli: {:?}", cli);

    match execute_command(&cli, out) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            debug!("command failed: {}", e);
            let _ = output::error(err, &e);
            e.exit_code()
        }
    }
}

fn report_parse_error<O: Write, E: Write>(e: &clap::Error, out: &mut O, err: &mut E) -> i32 {
    let rendered = e.render().to_string();
    let _ = if e.use_stderr() {
        output::raw(err, rendered.as_bytes())
    } else {
        output::raw(out, rendered.as_bytes())
    };
    e.exit_code()
}
