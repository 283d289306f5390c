//! Diagnostic logging to stderr
//!
//! stdout is reserved for command output, so every layer writes to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::prelude::*;

use crate::config::{LogFormat, Settings};

/// Pick the level filter: `-d` flags win over the configured `log_level`.
pub fn level_for(verbosity: u8, settings: &Settings) -> LevelFilter {
    match verbosity {
        0 => settings.level_filter().unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, settings: &Settings) -> LevelFilter {
    let filter = level_for(verbosity, settings);

    if tracing::dispatcher::has_been_set() {
        tracing::trace!("tracing subscriber already set");
        return filter;
    }

    let full = (settings.log_format == LogFormat::Full).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
    });
    let compact = (settings.log_format == LogFormat::Compact).then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter)
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(full)
        .with(compact)
        .try_init()
    {
        eprintln!("Error: Failed to set up logging: {}", e);
    }

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
    filter
}
