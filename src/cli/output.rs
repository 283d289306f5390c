//! Terminal output formatting
//!
//! Every function takes the target writer so commands can be driven
//! in-process with captured buffers. Respects NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

use crate::error::{AnalyticsResult, IoResultExt};

/// Print error (red bold "error:" prefix)
pub fn error<W: Write + ?Sized>(w: &mut W, msg: &(impl Display + ?Sized)) -> AnalyticsResult<()> {
    writeln!(w, "{}: {}", "error".red().bold(), msg).with_context("write to stderr")
}

/// Print warning (yellow "Warning:" prefix)
pub fn warning<W: Write + ?Sized>(w: &mut W, msg: &(impl Display + ?Sized)) -> AnalyticsResult<()> {
    writeln!(w, "{}: {}", "Warning".yellow(), msg).with_context("write to stderr")
}

/// Print plain output (no color, stable for scripts and tests)
pub fn info<W: Write + ?Sized>(w: &mut W, msg: &(impl Display + ?Sized)) -> AnalyticsResult<()> {
    writeln!(w, "{}", msg).with_context("write to stdout")
}

/// Print raw bytes already formatted elsewhere (help text, completion scripts)
pub fn raw<W: Write + ?Sized>(w: &mut W, bytes: &[u8]) -> AnalyticsResult<()> {
    w.write_all(bytes).with_context("write to stdout")?;
    w.flush().with_context("flush stdout")
}
