//! Logger configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - Normalization trims and lower-cases the level and trims field names.

use crate::load::ConfigFormat;
use logbridge_eventlog::{FieldNames, Level};
use logbridge_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

const DEFAULT_LEVEL: &str = "info";

/// Top-level logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggerConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Minimum eventlog level name (`trace` … `panic`, or `disabled`).
    pub level: String,
    /// Add the current time to every line.
    pub timestamp: bool,
    /// Output stream.
    pub output: OutputTarget,
    /// Write error cause chains next to error fields.
    pub error_stack: bool,
    /// Names of the fields the logger writes on its own behalf.
    pub field_names: FieldNamesConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            level: DEFAULT_LEVEL.to_string(),
            timestamp: true,
            output: OutputTarget::default(),
            error_stack: true,
            field_names: FieldNamesConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedLoggerConfig, ConfigSchemaError> {
        check_version(self.version)?;

        self.level = self.level.trim().to_ascii_lowercase();
        let level = parse_threshold(&self.level)?;

        self.field_names.normalize();
        let field_names = self.field_names.validate()?;

        Ok(ValidatedLoggerConfig {
            raw: self,
            level,
            field_names,
        })
    }
}

const fn check_version(found: u32) -> Result<(), ConfigSchemaError> {
    if found == CURRENT_CONFIG_VERSION {
        Ok(())
    } else {
        Err(ConfigSchemaError::UnsupportedVersion {
            found,
            supported: CURRENT_CONFIG_VERSION,
        })
    }
}

fn parse_threshold(value: &str) -> Result<Level, ConfigSchemaError> {
    match value.parse::<Level>() {
        Ok(Level::NoLevel) | Err(_) => Err(ConfigSchemaError::InvalidLevel {
            value: value.to_string(),
        }),
        Ok(level) => Ok(level),
    }
}

/// Output stream for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
}

impl OutputTarget {
    /// Config spelling of the target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::Stdout => "stdout",
        }
    }

    /// Parse a config spelling, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stderr" => Some(Self::Stderr),
            "stdout" => Some(Self::Stdout),
            _ => None,
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Reserved field names, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct FieldNamesConfig {
    /// Timestamp field.
    pub time: String,
    /// Level field.
    pub level: String,
    /// Message field.
    pub message: String,
    /// Error field.
    pub error: String,
    /// Error cause chain field.
    pub stack: String,
}

impl Default for FieldNamesConfig {
    fn default() -> Self {
        let names = FieldNames::default();
        Self {
            time: names.time,
            level: names.level,
            message: names.message,
            error: names.error,
            stack: names.stack,
        }
    }
}

impl FieldNamesConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("time", self.time.as_str()),
            ("level", self.level.as_str()),
            ("message", self.message.as_str()),
            ("error", self.error.as_str()),
            ("stack", self.stack.as_str()),
        ]
    }

    fn normalize(&mut self) {
        for name in [
            &mut self.time,
            &mut self.level,
            &mut self.message,
            &mut self.error,
            &mut self.stack,
        ] {
            let trimmed = name.trim();
            if trimmed.len() != name.len() {
                *name = trimmed.to_string();
            }
        }
    }

    fn validate(&self) -> Result<FieldNames, ConfigSchemaError> {
        let entries = self.entries();
        for (index, (field, name)) in entries.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigSchemaError::EmptyFieldName { field });
            }
            if let Some((other, _)) = entries
                .iter()
                .skip(index + 1)
                .find(|(_, candidate)| candidate == name)
            {
                return Err(ConfigSchemaError::DuplicateFieldName {
                    name: (*name).to_string(),
                    fields: (field, other),
                });
            }
        }
        Ok(FieldNames {
            time: self.time.clone(),
            level: self.level.clone(),
            message: self.message.clone(),
            error: self.error.clone(),
            stack: self.stack.clone(),
        })
    }
}

/// Logger config that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLoggerConfig {
    raw: LoggerConfig,
    level: Level,
    field_names: FieldNames,
}

impl ValidatedLoggerConfig {
    /// Parsed minimum level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Field names ready to hand to the logger.
    #[must_use]
    pub const fn field_names(&self) -> &FieldNames {
        &self.field_names
    }

    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &LoggerConfig {
        &self.raw
    }

    /// Consume the wrapper and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> LoggerConfig {
        self.raw
    }
}

impl AsRef<LoggerConfig> for ValidatedLoggerConfig {
    fn as_ref(&self) -> &LoggerConfig {
        &self.raw
    }
}

impl std::ops::Deref for ValidatedLoggerConfig {
    type Target = LoggerConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Validation failures for [`LoggerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// The level is not a usable threshold name.
    InvalidLevel {
        /// Normalized value provided.
        value: String,
    },
    /// A field name is empty after trimming.
    EmptyFieldName {
        /// Key under `fieldNames`.
        field: &'static str,
    },
    /// Two reserved fields share a name.
    DuplicateFieldName {
        /// Shared name.
        name: String,
        /// Keys under `fieldNames` that collide.
        fields: (&'static str, &'static str),
    },
}

impl ConfigSchemaError {
    /// Code under the `config` namespace.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::InvalidLevel { .. } => "invalid_level",
            Self::EmptyFieldName { .. } => "empty_field_name",
            Self::DuplicateFieldName { .. } => "duplicate_field_name",
        }
    }

    fn metadata(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::UnsupportedVersion { found, supported } => vec![
                ("found", found.to_string()),
                ("supported", supported.to_string()),
            ],
            Self::InvalidLevel { value } => vec![("value", value.clone())],
            Self::EmptyFieldName { field } => vec![("field", (*field).to_string())],
            Self::DuplicateFieldName { name, fields } => vec![
                ("name", name.clone()),
                ("fields", format!("{},{}", fields.0, fields.1)),
            ],
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "config version {found} is not supported (expected {supported})"
            ),
            Self::InvalidLevel { value } => write!(
                formatter,
                "level must be one of trace, debug, info, warn, error, fatal, panic, disabled (got {value:?})"
            ),
            Self::EmptyFieldName { field } => {
                write!(formatter, "fieldNames.{field} must be non-empty")
            },
            Self::DuplicateFieldName { name, fields } => write!(
                formatter,
                "fieldNames.{} and fieldNames.{} both use {name:?}",
                fields.0, fields.1
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        error.metadata().into_iter().fold(
            Self::expected(ErrorCode::new("config", error.code()), error.to_string()),
            |envelope, (key, value)| envelope.with_metadata(key, value),
        )
    }
}

/// Parse a logger config from a JSON string, applying validation and normalization.
pub fn parse_logger_config_json(input: &str) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    Ok(ConfigFormat::Json.parse(input)?.validate_and_normalize()?)
}

/// Parse a logger config from a TOML string, applying validation and normalization.
pub fn parse_logger_config_toml(input: &str) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    Ok(ConfigFormat::Toml.parse(input)?.validate_and_normalize()?)
}
