//! CLI end-to-end smoke tests.

use serde_json::{Value, json};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn logbridge(args: &[&str], env: &[(&str, &str)]) -> io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_logbridge"));
    command
        .args(args)
        .env_remove("LOGBRIDGE_LEVEL")
        .env_remove("LOGBRIDGE_TIMESTAMP")
        .env_remove("LOGBRIDGE_OUTPUT")
        .env_remove("LOGBRIDGE_ERROR_STACK")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output()
}

fn stdout_lines(output: &Output) -> Result<Vec<Value>, serde_json::Error> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(serde_json::from_str)
        .collect()
}

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates/testkit/fixtures")
        .join(relative)
}

const TO_STDOUT: [(&str, &str); 2] = [("LOGBRIDGE_OUTPUT", "stdout"), ("LOGBRIDGE_TIMESTAMP", "false")];

#[test]
fn demo_writes_reference_line_first() -> TestResult {
    let output = logbridge(&["demo"], &TO_STDOUT)?;
    assert!(output.status.success(), "demo failed: {output:?}");

    let lines = stdout_lines(&output)?;
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        json!({
            "level": "info",
            "serviceId": "34320feihsfhesfhesi",
            "userId": "jkratz",
            "http": {"method": "GET", "browser": "CHROME"},
            "message": "Hey this is a test",
        })
    );
    assert_eq!(lines[1]["http"]["status"], 200);
    assert_eq!(lines[2]["level"], "error");
    assert_eq!(lines[2]["error"], "connection reset by peer");
    assert!(lines[2]["stacktrace"].is_string());
    Ok(())
}

#[test]
fn emit_types_attrs_and_nests_groups() -> TestResult {
    let output = logbridge(
        &[
            "emit",
            "--level",
            "warn",
            "--message",
            "disk low",
            "--attr",
            "free_mb=12",
            "--attr",
            "ratio=0.5",
            "--attr",
            "ok=false",
            "--attr",
            "mount=/var",
            "--group",
            "host",
            "--group",
            "disk",
        ],
        &TO_STDOUT,
    )?;
    assert!(output.status.success(), "emit failed: {output:?}");

    let lines = stdout_lines(&output)?;
    assert_eq!(
        lines,
        vec![json!({
            "level": "warn",
            "host": {"disk": {"free_mb": 12, "ratio": 0.5, "ok": false, "mount": "/var"}},
            "message": "disk low",
        })]
    );
    Ok(())
}

#[test]
fn records_below_configured_level_are_dropped() -> TestResult {
    let output = logbridge(
        &["emit", "--level", "debug", "--message", "quiet"],
        &[("LOGBRIDGE_OUTPUT", "stdout"), ("LOGBRIDGE_LEVEL", "info")],
    )?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn config_file_settings_reach_the_backend() -> TestResult {
    let path = fixture("config/logger.valid.json");
    let config = path.to_string_lossy();
    let output = logbridge(
        &["--config", &config, "emit", "--level", "info", "--message", "hi"],
        &[],
    )?;

    assert!(output.status.success(), "emit failed: {output:?}");
    let lines = stdout_lines(&output)?;
    assert_eq!(lines, vec![json!({"severity": "info", "msg": "hi"})]);
    Ok(())
}

#[test]
fn config_show_prints_effective_config() -> TestResult {
    let output = logbridge(
        &["config", "show"],
        &[("LOGBRIDGE_LEVEL", "error"), ("LOGBRIDGE_OUTPUT", "stdout")],
    )?;

    assert!(output.status.success());
    let shown: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(shown["version"], 1);
    assert_eq!(shown["level"], "error");
    assert_eq!(shown["output"], "stdout");
    assert_eq!(shown["fieldNames"]["message"], "message");
    Ok(())
}

#[test]
fn invalid_inputs_use_documented_exit_codes() -> TestResult {
    let bad_level = logbridge(&["config", "show"], &[("LOGBRIDGE_LEVEL", "chatty")])?;
    assert_eq!(bad_level.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&bad_level.stderr).contains("config:invalid_level"));

    let missing = logbridge(&["--config", "no/such/logger.toml", "config", "show"], &[])?;
    assert_eq!(missing.status.code(), Some(3));

    let bad_attr = logbridge(&["emit", "--message", "m", "--attr", "novalue"], &[])?;
    assert_eq!(bad_attr.status.code(), Some(2));
    Ok(())
}
