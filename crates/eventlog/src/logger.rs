//! Leveled logger handle.

use crate::context::Context;
use crate::event::Event;
use crate::fields::{FieldBuf, FieldNames};
use crate::sink::LogSink;
use crate::Level;
use std::sync::Arc;

/// Leveled JSON logger.
///
/// Cloning is cheap: the sink, field names and bound context fields are
/// shared. Every configuration method returns a new logger and leaves the
/// receiver untouched.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: Level,
    context: Arc<FieldBuf>,
    names: Arc<FieldNames>,
    timestamp: bool,
    stack: bool,
}

impl Logger {
    /// Create a logger writing to `sink` with a `Trace` threshold.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            level: Level::Trace,
            context: Arc::default(),
            names: Arc::new(FieldNames::default()),
            timestamp: false,
            stack: false,
        }
    }

    /// Replace the reserved field names.
    #[must_use]
    pub fn with_field_names(mut self, names: FieldNames) -> Self {
        self.names = Arc::new(names);
        self
    }

    /// Copy of this logger with a different minimum level.
    #[must_use]
    pub fn level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// Current minimum level.
    #[must_use]
    pub const fn get_level(&self) -> Level {
        self.level
    }

    /// Start binding persistent fields; finish with [`Context::logger`].
    #[must_use]
    pub fn with(&self) -> Context {
        Context::new(self.clone(), (*self.context).clone())
    }

    /// Open an event at `level`.
    ///
    /// Unlike [`Logger::fatal`], this never terminates the process, whatever
    /// the level.
    #[must_use]
    pub fn with_level(&self, level: Level) -> Event {
        Event::open(self, level, false)
    }

    /// Open a trace event.
    #[must_use]
    pub fn trace(&self) -> Event {
        self.with_level(Level::Trace)
    }

    /// Open a debug event.
    #[must_use]
    pub fn debug(&self) -> Event {
        self.with_level(Level::Debug)
    }

    /// Open an info event.
    #[must_use]
    pub fn info(&self) -> Event {
        self.with_level(Level::Info)
    }

    /// Open a warn event.
    #[must_use]
    pub fn warn(&self) -> Event {
        self.with_level(Level::Warn)
    }

    /// Open an error event.
    #[must_use]
    pub fn error(&self) -> Event {
        self.with_level(Level::Error)
    }

    /// Open a fatal event. The process exits with status 1 once it is sent,
    /// even when the event itself is filtered out.
    #[must_use]
    pub fn fatal(&self) -> Event {
        Event::open(self, Level::Fatal, true)
    }

    /// Open an event without a level field.
    #[must_use]
    pub fn log(&self) -> Event {
        self.with_level(Level::NoLevel)
    }

    pub(crate) fn should(&self, level: Level) -> bool {
        self.level != Level::Disabled && level != Level::Disabled && level >= self.level
    }

    pub(crate) fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    pub(crate) const fn field_names(&self) -> &Arc<FieldNames> {
        &self.names
    }

    pub(crate) fn context_fields(&self) -> &FieldBuf {
        &self.context
    }

    pub(crate) const fn timestamp_enabled(&self) -> bool {
        self.timestamp
    }

    pub(crate) const fn stack_enabled(&self) -> bool {
        self.stack
    }

    pub(crate) fn rebind(
        &self,
        context: FieldBuf,
        timestamp: bool,
        stack: bool,
    ) -> Self {
        Self {
            context: Arc::new(context),
            timestamp,
            stack,
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Logger")
            .field("level", &self.level)
            .field("context", &self.context)
            .field("timestamp", &self.timestamp)
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::capture::Captured;
    use proptest::prelude::*;
    use serde_json::Value;

    #[test]
    fn level_returns_a_copy() {
        let logger = Logger::new(Arc::new(Captured::default()));
        let quiet = logger.level(Level::Error);
        assert_eq!(logger.get_level(), Level::Trace);
        assert_eq!(quiet.get_level(), Level::Error);
    }

    #[test]
    fn disabled_threshold_blocks_everything() {
        let sink = Arc::new(Captured::default());
        let logger = Logger::new(sink.clone()).level(Level::Disabled);

        logger.log().msg("no level");
        logger.with_level(Level::Panic).msg("panic");
        assert!(sink.take().is_empty());
    }

    #[test]
    fn custom_field_names_are_used() -> Result<(), Box<dyn std::error::Error>> {
        let sink = Arc::new(Captured::default());
        let logger = Logger::new(sink.clone()).with_field_names(FieldNames {
            level: "severity".to_string(),
            message: "msg".to_string(),
            ..FieldNames::default()
        });

        logger.warn().msg("renamed");

        let payload: Value = serde_json::from_str(sink.take()[0].trim())?;
        assert_eq!(payload["severity"], "warn");
        assert_eq!(payload["msg"], "renamed");
        Ok(())
    }

    proptest! {
        #[test]
        fn threshold_filters_monotonically(threshold in 0usize..9, level in 0usize..9) {
            let threshold = Level::ALL[threshold];
            let level = Level::ALL[level];
            let logger = Logger::new(Arc::new(Captured::default())).level(threshold);
            let expected = threshold != Level::Disabled
                && level != Level::Disabled
                && level >= threshold;
            prop_assert_eq!(logger.with_level(level).is_enabled(), expected);
        }
    }
}
