//! CLI error type and process exit codes.

use logbridge_shared::ErrorEnvelope;
use std::fmt;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    Internal = 1,
    InvalidInput = 2,
    Io = 3,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Config codes that come from reading the file rather than its contents.
const CONFIG_IO_CODES: [&str; 3] = [
    "config_file_not_found",
    "config_file_permission_denied",
    "config_file_io",
];

#[derive(Debug)]
pub enum CliError {
    InvalidInput(String),
    Config(ErrorEnvelope),
    Log(ErrorEnvelope),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(envelope) if CONFIG_IO_CODES.contains(&envelope.code.code()) => {
                ExitCode::Io
            },
            Self::InvalidInput(_) | Self::Config(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Log(_) | Self::Serialization(_) => ExitCode::Internal,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, envelope) = match self {
            Self::Config(envelope) => ("config", envelope),
            Self::Log(envelope) => ("log", envelope),
            Self::InvalidInput(message) => return write!(formatter, "invalid input: {message}"),
            Self::Io(error) => return write!(formatter, "io error: {error}"),
            Self::Serialization(error) => {
                return write!(formatter, "serialization error: {error}");
            },
        };
        write!(formatter, "{label} error [{}]: {}", envelope.code, envelope.message)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(envelope) | Self::Log(envelope) => Some(envelope),
            Self::Io(error) => Some(error),
            Self::Serialization(error) => Some(error),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}
