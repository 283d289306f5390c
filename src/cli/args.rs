//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Shinkansen Analytics Worker CLI
#[derive(Parser, Debug)]
#[command(name = "shinkansen-analytics")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the analytics worker
    Start {
        /// Path to configuration file (an empty value means the default)
        #[arg(long, value_hint = ValueHint::FilePath, value_parser = path_value())]
        config: Option<PathBuf>,
    },

    /// Check the status of the analytics worker
    Status,

    /// Export analytics metrics
    Metrics {
        /// Output file path
        #[arg(
            long,
            default_value = "metrics.json",
            value_hint = ValueHint::FilePath,
            value_parser = path_value()
        )]
        output: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Paths are echoed, never checked, so empty values pass through.
fn path_value() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}
