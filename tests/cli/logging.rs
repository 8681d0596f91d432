use crate::cli::support::moodfit;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["--log-level", "debug", "moods"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["--log-level", "warn", "moods"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_traces_core_events() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["--verbose", "suggest", "-m", "calm", "-w", "cold"])
        .assert()
        .success()
        .stderr(predicate::str::contains("suggest"))
        .stderr(predicate::str::contains("catalog_loaded"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = moodfit(dir.path())
        .args(["--log-level", "debug", "--log-json", "moods"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let json: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(json.get("level").is_some());
}

#[test]
fn test_moodfit_log_env_overrides_flags() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .env("MOODFIT_LOG", "debug")
        .args(["--log-level", "error", "moods"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_malformed_log_level_keeps_command_running() {
    let dir = tempdir().unwrap();

    moodfit(dir.path())
        .args(["--log-level", "moodfit=loud", "moods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moods:"))
        .stderr(predicate::str::contains("logging disabled"));
}
