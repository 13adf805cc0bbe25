//! Integration tests for the wrkrs CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 11] = [
    "WRKRS_SERVER",
    "WRKRS_PROCESS",
    "WRKRS_NAMESPACE",
    "WRKRS_POOL",
    "WRKRS_POLL_INTERVAL",
    "WRKRS_DIAL_TIMEOUT",
    "WRKRS_READ_TIMEOUT",
    "WRKRS_WRITE_TIMEOUT",
    "WRKRS_DEBUG",
    "WRKRS_LOG_LEVEL",
    "WRKRS_LOG_FORMAT",
];

/// Get the wrkrs binary, isolated from the caller's environment and cwd
#[allow(deprecated)]
fn wrkrs_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wrkrs").unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrkrs CLI"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn test_check_valid_flags() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args(["check", "--server", "localhost:6379", "--process", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid!"))
        .stdout(predicate::str::contains("localhost:6379"));
}

#[test]
fn test_check_requires_server() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args(["check", "--process", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configure requires a 'server' option, which identifies a Redis instance",
        ));
}

#[test]
fn test_check_requires_process() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args(["check"])
        .env("WRKRS_SERVER", "localhost:6379")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configure requires a 'process' option, which uniquely identifies this instance",
        ));
}

#[test]
fn test_check_warns_on_unknown_option() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args([
            "check",
            "--server",
            "localhost:6379",
            "--process",
            "1",
            "-o",
            "concurrency=10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid with warnings"))
        .stdout(predicate::str::contains("concurrency"));
}

#[test]
fn test_check_rejects_invalid_number() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args([
            "check",
            "--server",
            "localhost:6379",
            "--process",
            "1",
            "--pool",
            "lots",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configure option 'pool' must be an integer, got 'lots'",
        ));
}

#[test]
fn test_show_json_defaults_and_overrides() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args([
            "show",
            "--format",
            "json",
            "--server",
            "localhost:6379",
            "--process",
            "1",
            "--namespace",
            "prod",
            "--write-timeout",
            "100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"namespace\": \"prod:\""))
        .stdout(predicate::str::contains("\"poll_interval_secs\": 15"))
        .stdout(predicate::str::contains("\"dial_timeout_ms\": 500"))
        .stdout(predicate::str::contains("\"write_timeout_ms\": 100"));
}

#[test]
fn test_show_json_stays_parseable_with_logging() {
    let dir = TempDir::new().unwrap();
    let assert = wrkrs_cmd(&dir)
        .args([
            "show",
            "--format",
            "json",
            "--no-env",
            "--server",
            "localhost:6379",
            "--process",
            "1",
        ])
        .env("WRKRS_LOG_LEVEL", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration applied"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["server"], "localhost:6379");
    assert_eq!(json["process_id"], "1");
}

#[test]
fn test_log_level_flag_keeps_toml_on_stdout() {
    let dir = TempDir::new().unwrap();
    let assert = wrkrs_cmd(&dir)
        .args([
            "--log-level",
            "debug",
            "show",
            "--format",
            "toml",
            "--server",
            "localhost:6379",
            "--process",
            "1",
            "--pool",
            "4",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration resolved"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: toml::Value = toml::from_str(&stdout).unwrap();
    assert_eq!(value["pool"]["max_idle"].as_integer(), Some(4));
}

#[test]
fn test_show_reads_default_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("wrkrs.toml"),
        "[wrkrs]\nserver = \"localhost:6379\"\nprocess = 1\npool = 20\n",
    )
    .unwrap();

    wrkrs_cmd(&dir)
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_idle\": 20"))
        .stdout(predicate::str::contains("\"process_id\": \"1\""));
}

#[test]
fn test_precedence_file_env_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workers.toml");
    fs::write(
        &path,
        "[wrkrs]\nserver = \"localhost:6379\"\nprocess = \"1\"\npool = 5\npoll_interval = 30\n",
    )
    .unwrap();

    wrkrs_cmd(&dir)
        .args(["show", "--format", "json", "--config"])
        .arg(&path)
        .env("WRKRS_POOL", "6")
        .env("WRKRS_PROCESS", "env-process")
        .args(["--process", "flag-process"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_idle\": 6"))
        .stdout(predicate::str::contains("\"poll_interval_secs\": 30"))
        .stdout(predicate::str::contains("\"process_id\": \"flag-process\""));
}

#[test]
fn test_no_env_ignores_environment() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .args(["check", "--no-env", "--process", "1"])
        .env("WRKRS_SERVER", "localhost:6379")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'server' option"));
}

#[test]
fn test_defaults_command() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("poll_interval"))
        .stdout(predicate::str::contains("default: 15"))
        .stdout(predicate::str::contains("WRKRS_READ_TIMEOUT"))
        .stdout(predicate::str::contains("required"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    wrkrs_cmd(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"));
}
