//! Config loading helpers (file + env).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{LoggerConfig, LoggerEnv, ValidatedLoggerConfig, apply_env_overrides};
use logbridge_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

/// Serialization of a config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Format implied by the file extension; no extension means JSON.
    fn of_path(path: &Path) -> Result<Self, ErrorEnvelope> {
        let Some(extension) = path.extension() else {
            return Ok(Self::Json);
        };
        let extension = extension.to_string_lossy().to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ErrorEnvelope::expected(
                ErrorCode::new("config", "unsupported_format"),
                format!("config files must end in .json or .toml, not .{extension}"),
            )
            .with_metadata("extension", extension)),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    const fn parse_error_code(self) -> &'static str {
        match self {
            Self::Json => "invalid_json",
            Self::Toml => "invalid_toml",
        }
    }

    /// Deserialize without validating.
    pub(crate) fn parse(self, input: &str) -> Result<LoggerConfig, ErrorEnvelope> {
        let parsed = match self {
            Self::Json => serde_json::from_str(input).map_err(|error| error.to_string()),
            Self::Toml => toml::from_str(input).map_err(|error| error.to_string()),
        };
        parsed.map_err(|detail| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", self.parse_error_code()),
                format!("invalid config {}: {detail}", self.label()),
            )
            .with_metadata("source", "config")
        })
    }
}

/// Load the logger config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`LoggerEnv`)
/// - config JSON (file content)
/// - defaults (`LoggerConfig::default()`)
pub fn load_logger_config_from_sources(
    config_json: Option<&str>,
    env: &LoggerEnv,
) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let config = match config_json {
        None => LoggerConfig::default(),
        Some(input) => ConfigFormat::Json.parse(input)?,
    };

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Load the logger config from an optional file path.
pub fn load_logger_config_from_path(
    config_path: Option<&Path>,
    env: &LoggerEnv,
) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let config = match config_path {
        None => LoggerConfig::default(),
        Some(path) => {
            let format = ConfigFormat::of_path(path)?;
            tracing::debug!(path = %path.display(), ?format, "loading logger config");
            format.parse(&read_config(path)?)?
        },
    };

    apply_env_overrides(config, env)
}

/// Load the logger config from std env and an optional file path.
pub fn load_logger_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let env = LoggerEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    if !env.is_empty() {
        tracing::debug!(?env, "applying logger env overrides");
    }
    load_logger_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &LoggerConfig) -> Result<String, ErrorEnvelope> {
    serde_json::to_string_pretty(config)
        .map(with_trailing_newline)
        .map_err(|error| serialize_error("serialize_json", &error))
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &LoggerConfig) -> Result<String, ErrorEnvelope> {
    toml::to_string_pretty(config)
        .map(with_trailing_newline)
        .map_err(|error| serialize_error("serialize_toml", &error))
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn serialize_error(code: &str, error: &dyn std::fmt::Display) -> ErrorEnvelope {
    ErrorEnvelope::unexpected(
        ErrorCode::new("config", code),
        format!("cannot serialize config: {error}"),
        ErrorClass::NonRetriable,
    )
}

fn read_config(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => "config_file_not_found",
            std::io::ErrorKind::PermissionDenied => "config_file_permission_denied",
            _ => "config_file_io",
        };
        ErrorEnvelope::expected(
            ErrorCode::new("config", code),
            format!("cannot read {}: {error}", path.display()),
        )
        .with_metadata("path", path.display().to_string())
    })
}
