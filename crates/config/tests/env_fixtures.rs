//! Integration tests for env parsing and env-to-config merging.

use logbridge_config::{
    EnvParseError, LoggerConfig, LoggerEnv, OutputTarget, apply_env_overrides,
    load_logger_config_from_path,
};
use logbridge_eventlog::Level;
use logbridge_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf)
        .join("crates")
        .join("testkit")
        .join("fixtures")
}

fn read_env_map(relative: &str) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let contents = fs::read_to_string(fixtures_dir().join(relative))?;
    Ok(serde_json::from_str(&contents)?)
}

#[test]
fn env_fixture_merges_into_effective_config() -> Result<(), Box<dyn Error>> {
    let env = LoggerEnv::from_map(&read_env_map("env/logger-env.valid.json")?)?;

    let config = apply_env_overrides(LoggerConfig::default(), &env)?;

    assert_eq!(config.level(), Level::Error);
    assert!(!config.timestamp);
    assert_eq!(config.output, OutputTarget::Stdout);
    assert!(config.error_stack);
    Ok(())
}

#[test]
fn env_overrides_file_values() -> Result<(), Box<dyn Error>> {
    let env = LoggerEnv::from_map(&read_env_map("env/logger-env.valid.json")?)?;
    let path = fixtures_dir().join("config/logger.valid.toml");

    let config = load_logger_config_from_path(Some(&path), &env)?;

    assert_eq!(config.level(), Level::Error);
    assert_eq!(config.output, OutputTarget::Stdout);
    assert!(config.error_stack);
    assert_eq!(config.field_names().time, "ts", "file values survive");
    Ok(())
}

#[test]
fn invalid_env_fixture_reports_var_and_value() -> Result<(), Box<dyn Error>> {
    let error = LoggerEnv::from_map(&read_env_map("env/logger-env.invalid.json")?)
        .err()
        .ok_or_else(|| std::io::Error::other("expected env parse error"))?;
    assert!(matches!(error, EnvParseError::InvalidBool { .. }));

    let envelope = ErrorEnvelope::from(error);
    assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_bool"));
    assert_eq!(
        envelope.metadata.get("env_var").map(String::as_str),
        Some("LOGBRIDGE_TIMESTAMP")
    );
    assert_eq!(
        envelope.metadata.get("value").map(String::as_str),
        Some("sometimes")
    );
    Ok(())
}
