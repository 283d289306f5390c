//! A broken `SHINKANSEN_ANALYTICS_*` override must not change command results.
//! Kept in its own test binary so the variable does not leak into other tests.

use std::env;

use shinkansen_analytics::cli::run;
use shinkansen_analytics::exitcode;

#[test]
fn given_invalid_log_level_env_when_run_then_warns_and_succeeds() {
    env::set_var("SHINKANSEN_ANALYTICS_LOG_LEVEL", "loud");
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(["shinkansen-analytics", "status"], &mut out, &mut err);
    env::remove_var("SHINKANSEN_ANALYTICS_LOG_LEVEL");

    let stdout = String::from_utf8(out).unwrap();
    let stderr = String::from_utf8(err).unwrap();
    assert_eq!(code, exitcode::OK, "stderr: {}", stderr);
    assert_eq!(stdout, "Analytics worker status: Ready\n");
    assert!(stderr.contains("Warning"), "stderr: {}", stderr);
    assert!(
        stderr.contains("invalid log_level: loud; using default settings"),
        "stderr: {}",
        stderr
    );
}
