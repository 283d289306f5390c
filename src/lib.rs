//! Shinkansen analytics worker CLI
//!
//! The binary is a thin wrapper around [`cli::run`], which tests drive
//! in-process with captured writers.

pub mod cli;
pub mod config;
pub mod error;
pub mod exitcode;
pub mod logging;
pub mod util;

pub use error::{AnalyticsError, AnalyticsResult};
