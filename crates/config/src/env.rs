//! Environment variable parsing for logger configuration.
//!
//! Env values override file values; the merged config is validated once.

use crate::schema::{LoggerConfig, OutputTarget, ValidatedLoggerConfig};
use logbridge_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum eventlog level.
pub const ENV_LEVEL: &str = "LOGBRIDGE_LEVEL";
/// Toggle the timestamp field.
pub const ENV_TIMESTAMP: &str = "LOGBRIDGE_TIMESTAMP";
/// Output stream (`stderr` or `stdout`).
pub const ENV_OUTPUT: &str = "LOGBRIDGE_OUTPUT";
/// Toggle error cause chains.
pub const ENV_ERROR_STACK: &str = "LOGBRIDGE_ERROR_STACK";

const KNOWN_VARS: [&str; 4] = [ENV_LEVEL, ENV_TIMESTAMP, ENV_OUTPUT, ENV_ERROR_STACK];

/// Parsed env overrides. `None` leaves the file or default value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerEnv {
    /// Override for `level` (validated with the rest of the config).
    pub level: Option<String>,
    /// Override for `timestamp`.
    pub timestamp: Option<bool>,
    /// Override for `output`.
    pub output: Option<OutputTarget>,
    /// Override for `errorStack`.
    pub error_stack: Option<bool>,
}

impl LoggerEnv {
    /// Parse overrides from a name → value map.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            level: parse_optional_string(map, ENV_LEVEL)?,
            timestamp: parse_optional_bool(map, ENV_TIMESTAMP)?,
            output: parse_optional_output(map, ENV_OUTPUT)?,
            error_stack: parse_optional_bool(map, ENV_ERROR_STACK)?,
        })
    }

    /// Parse overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let map: BTreeMap<String, String> = KNOWN_VARS
            .iter()
            .filter_map(|name| Some(((*name).to_string(), std::env::var(name).ok()?)))
            .collect();
        Self::from_map(&map)
    }

    /// True when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.timestamp.is_none()
            && self.output.is_none()
            && self.error_stack.is_none()
    }
}

/// Apply env overrides on top of `base`, then validate and normalize.
pub fn apply_env_overrides(
    base: LoggerConfig,
    env: &LoggerEnv,
) -> Result<ValidatedLoggerConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(level) = &env.level {
        config.level.clone_from(level);
    }
    if let Some(timestamp) = env.timestamp {
        config.timestamp = timestamp;
    }
    if let Some(output) = env.output {
        config.output = output;
    }
    if let Some(error_stack) = env.error_stack {
        config.error_stack = error_stack;
    }

    config.validate_and_normalize().map_err(Into::into)
}

/// Env parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// Set, but blank.
    EmptyValue {
        /// Variable name.
        var: &'static str,
    },
    /// Not one of `true/false/1/0/yes/no/on/off`.
    InvalidBool {
        /// Variable name.
        var: &'static str,
        /// Value as set.
        value: String,
    },
    /// Not one of the accepted spellings.
    InvalidEnum {
        /// Variable name.
        var: &'static str,
        /// Value as set.
        value: String,
    },
}

impl EnvParseError {
    /// Code under the `config` namespace.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyValue { .. } => "empty_env_var",
            Self::InvalidBool { .. } => "invalid_env_bool",
            Self::InvalidEnum { .. } => "invalid_env_enum",
        }
    }

    /// Variable that failed to parse.
    #[must_use]
    pub const fn var(&self) -> &'static str {
        match self {
            Self::EmptyValue { var }
            | Self::InvalidBool { var, .. }
            | Self::InvalidEnum { var, .. } => var,
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let var = self.var();
        match self {
            Self::EmptyValue { .. } => write!(formatter, "{var} is set but empty"),
            Self::InvalidBool { value, .. } => {
                write!(formatter, "{var}={value:?} is not a boolean")
            },
            Self::InvalidEnum { value, .. } => {
                write!(formatter, "{var}={value:?} is not a supported value")
            },
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(ErrorCode::new("config", error.code()), error.to_string())
            .with_metadata("env_var", error.var());
        match error {
            EnvParseError::EmptyValue { .. } => envelope,
            EnvParseError::InvalidBool { value, .. } | EnvParseError::InvalidEnum { value, .. } => {
                envelope.with_metadata("value", value)
            },
        }
    }
}

/// Value of `var` with surrounding whitespace removed; `None` when unset.
fn raw_value<'a>(
    map: &'a BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<&'a str>, EnvParseError> {
    match map.get(var).map(|raw| raw.trim()) {
        None => Ok(None),
        Some("") => Err(EnvParseError::EmptyValue { var }),
        Some(trimmed) => Ok(Some(trimmed)),
    }
}

fn parse_optional_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<String>, EnvParseError> {
    Ok(raw_value(map, var)?.map(str::to_string))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    raw_value(map, var)?
        .map(|value| match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(EnvParseError::InvalidBool {
                var,
                value: value.to_string(),
            }),
        })
        .transpose()
}

fn parse_optional_output(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<OutputTarget>, EnvParseError> {
    raw_value(map, var)?
        .map(|value| {
            OutputTarget::parse(value).ok_or_else(|| EnvParseError::InvalidEnum {
                var,
                value: value.to_string(),
            })
        })
        .transpose()
}
