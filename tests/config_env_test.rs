//! `SHINKANSEN_ANALYTICS_*` overrides. Kept in its own test binary and a single
//! test so the process environment is not shared with other tests.

use std::env;
use std::fs;

use tempfile::TempDir;

use shinkansen_analytics::config::{LogFormat, Settings};

#[test]
fn given_env_vars_when_load_then_env_wins_over_global_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"info\"\nlog_format = \"full\"\n").unwrap();

    env::set_var("SHINKANSEN_ANALYTICS_LOG_LEVEL", "trace");
    env::set_var("SHINKANSEN_ANALYTICS_LOG_FORMAT", "compact");
    let settings = Settings::load_from(Some(&path));
    env::remove_var("SHINKANSEN_ANALYTICS_LOG_LEVEL");
    env::remove_var("SHINKANSEN_ANALYTICS_LOG_FORMAT");

    let settings = settings.expect("load settings");
    assert_eq!(settings.log_level, "trace");
    assert_eq!(settings.log_format, LogFormat::Compact);
}
