//! Backend log levels.

use std::fmt;
use std::str::FromStr;

/// Severity of an event.
///
/// Ordering follows the discriminants: `Fatal` ranks below `Panic`, and the
/// two sentinels sit above every real severity. `NoLevel` events pass any
/// threshold except `Disabled` and are written without a level field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Level {
    /// Fine-grained tracing.
    Trace = -1,
    /// Debugging detail.
    Debug = 0,
    /// Routine information.
    Info = 1,
    /// Something unexpected but recoverable.
    Warn = 2,
    /// A failure.
    Error = 3,
    /// A failure after which the process exits (see [`crate::Logger::fatal`]).
    Fatal = 4,
    /// A failure severe enough to abort the current flow.
    Panic = 5,
    /// No level; the level field is omitted.
    NoLevel = 6,
    /// Threshold that disables all output.
    Disabled = 7,
}

impl Level {
    /// Every level, lowest rank first.
    pub const ALL: [Self; 9] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
        Self::NoLevel,
        Self::Disabled,
    ];

    /// Lower-case name written into the level field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
            Self::NoLevel => "",
            Self::Disabled => "disabled",
        }
    }

    /// Numeric rank of the level.
    #[must_use]
    pub const fn rank(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| ParseLevelError {
                input: input.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_rank() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
        assert!(Level::Panic < Level::NoLevel);
        assert!(Level::NoLevel < Level::Disabled);
        assert_eq!(Level::Trace.rank(), -1);
        assert_eq!(Level::Disabled.rank(), 7);
    }

    #[test]
    fn names_parse_back() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
        assert_eq!(" WARN ".parse::<Level>(), Ok(Level::Warn));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let error = "verbose".parse::<Level>().err();
        assert_eq!(error.as_ref().map(ParseLevelError::input), Some("verbose"));
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("unknown level: \"verbose\"".to_string())
        );
    }
}
