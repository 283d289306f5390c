//! Process exit codes
//!
//! Runtime failures follow BSD sysexits.h. Usage errors keep clap's code.

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error, as reported by clap
pub const USAGE: i32 = 2;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
