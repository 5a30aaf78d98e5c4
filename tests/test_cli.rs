//! CLI behavior tests that need no network
mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{rbdl, TestEnv, EMAIL};

fn cli(env: &TestEnv) -> Command {
    Command::from_std(env.command())
}

// ============================================================================
// Help & Version
// ============================================================================

#[test]
fn test_help_lists_filters_and_examples() {
    let env = TestEnv::new();
    cli(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--callsign"))
        .stdout(predicate::str::contains("--on-air"))
        .stdout(predicate::str::contains("RBDL_EMAIL"))
        .stdout(predicate::str::contains("rbdl --email user@example.com --callsign W%"))
        .stdout(predicate::str::contains("Use % as wildcard"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    cli(&env)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_missing_email() {
    let r = rbdl(&["--country", "Canada"]);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains(
        "Error: email is required (use --email flag or set a RBDL_EMAIL environment variable)"
    ), "stderr: {}", r.stderr);
}

#[test]
fn test_empty_email_env_is_missing() {
    let mut env = TestEnv::new();
    env.set_env("RBDL_EMAIL", "");
    let r = env.run(&["--country", "Canada"]);

    assert_eq!(r.exit_code, 1);
    assert!(r.stderr.contains("email is required"));
}

#[test]
fn test_invalid_format_rejected() {
    let env = TestEnv::new();
    cli(&env)
        .args(["--email", EMAIL, "--format", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("xml"));
    assert!(env.files().is_empty());
}

#[test]
fn test_unknown_flag_rejected() {
    let r = rbdl(&["--email", EMAIL, "--bogus"]);
    assert_eq!(r.exit_code, 1);
}

// ============================================================================
// Dry Run
// ============================================================================

#[test]
fn test_dry_run_prints_url() {
    let env = TestEnv::new();
    cli(&env)
        .args(["--email", EMAIL, "--dry-run", "--country", "United States", "--frequency", "146.52"])
        .assert()
        .success()
        .stdout("https://www.repeaterbook.com/api/export.php?country=United+States&frequency=146.52\n");
    assert!(env.files().is_empty());
}

#[test]
fn test_dry_run_without_filters() {
    let env = TestEnv::new();
    cli(&env)
        .args(["--email", EMAIL, "--dry-run"])
        .assert()
        .success()
        .stdout("https://www.repeaterbook.com/api/export.php\n");
}

#[test]
fn test_dry_run_still_requires_email() {
    let env = TestEnv::new();
    cli(&env)
        .arg("--dry-run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("email is required"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_default_options() {
    let env = TestEnv::new();
    env.write_config("[defaults]\noptions = [\"--email=config@example.com\", \"--region=Europe\"]\n");

    cli(&env)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("region=Europe"));
}

#[test]
fn test_config_defaults_overridden_by_flags() {
    let env = TestEnv::new();
    env.write_config("[defaults]\noptions = [\"--email=config@example.com\", \"--mode=analog\"]\n");

    cli(&env)
        .args(["--dry-run", "--mode", "DMR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=DMR"))
        .stdout(predicate::str::contains("analog").not());
}

#[test]
fn test_invalid_config_is_a_warning() {
    let env = TestEnv::new();
    env.write_config("[defaults\n");

    cli(&env)
        .args(["--email", EMAIL, "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to load config"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_go_to_stderr() {
    let env = TestEnv::new();
    cli(&env)
        .args(["--email", EMAIL, "--dry-run", "-vv"])
        .assert()
        .success()
        .stdout("https://www.repeaterbook.com/api/export.php\n")
        .stderr(predicate::str::contains("Configuration loaded"));
}
