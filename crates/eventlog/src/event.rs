//! Per-call event builder.

use crate::fields::{FieldBuf, FieldNames};
use crate::logger::Logger;
use crate::setters::typed_setters;
use crate::Level;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Fields accumulated for a single log call.
///
/// An event is opened by a [`Logger`] method, populated through chained
/// setters, and written by [`Event::msg`] or [`Event::send`]. Setters on a
/// disabled event (below the logger's threshold) are no-ops. Events created
/// with [`dict`] have no logger and are only useful as [`Event::dict`]
/// values.
///
/// Fields are appended in call order and a repeated key is written again
/// rather than replaced. On a logger's event, a key equal to the level, time
/// or message field name is written as `fields.<key>`.
#[derive(Clone)]
pub struct Event {
    fields: FieldBuf,
    enabled: bool,
    stack: bool,
    names: Arc<FieldNames>,
    target: Option<Target>,
}

#[derive(Clone)]
struct Target {
    level: Level,
    logger: Logger,
    exit_after_write: bool,
}

/// Start a detached event used as a nested dictionary value.
///
/// The dictionary uses the default field names; see [`Event::nested`] for one
/// that follows a logger's configuration.
#[must_use]
pub fn dict() -> Event {
    Event::detached(Arc::new(FieldNames::default()), false)
}

impl Event {
    fn detached(names: Arc<FieldNames>, stack: bool) -> Self {
        Self {
            fields: FieldBuf::default(),
            enabled: true,
            stack,
            names,
            target: None,
        }
    }

    /// Start a detached dictionary sharing this event's field names and
    /// stack setting.
    #[must_use]
    pub fn nested(&self) -> Self {
        Self::detached(Arc::clone(&self.names), self.stack)
    }

    pub(crate) fn open(logger: &Logger, level: Level, exit_after_write: bool) -> Self {
        Self {
            fields: FieldBuf::default(),
            enabled: logger.should(level),
            stack: logger.stack_enabled(),
            names: Arc::clone(logger.field_names()),
            target: Some(Target {
                level,
                logger: logger.clone(),
                exit_after_write,
            }),
        }
    }

    typed_setters!();

    /// Add a field holding the JSON serialization of `value`.
    ///
    /// Serialization failures are recorded as a string field rather than
    /// dropping the event.
    #[must_use]
    pub fn any<T>(self, key: &str, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        if !self.enabled {
            return self;
        }
        let encoded = serde_json::to_value(value)
            .unwrap_or_else(|error| Value::String(format!("marshaling error: {error}")));
        self.put(key, encoded)
    }

    /// Nest the fields of `dict` under `key`.
    #[must_use]
    pub fn dict(mut self, key: &str, dict: Self) -> Self {
        if self.enabled {
            let key = self.field_key(key);
            self.fields.push_object(&key, &dict.fields);
        }
        self
    }

    /// Render errors added after this call with their cause chains.
    #[must_use]
    pub const fn stack(mut self) -> Self {
        self.stack = true;
        self
    }

    /// Returns true when the event will be written.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Level the event was opened at (`None` for dictionaries).
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        self.target.as_ref().map(|target| target.level)
    }

    /// Write the event with `message`.
    ///
    /// An empty message omits the message field. Dictionaries are never
    /// written. Events opened with [`Logger::fatal`] exit the process after
    /// writing.
    pub fn msg(self, message: &str) {
        let Some(target) = self.target else {
            return;
        };
        if self.enabled {
            let line = encode_line(&target, &self.fields, message);
            target.logger.sink().write_line(&line);
        }
        if target.exit_after_write {
            std::process::exit(1);
        }
    }

    /// Write the event without a message.
    pub fn send(self) {
        self.msg("");
    }

    fn put(mut self, key: &str, value: Value) -> Self {
        if self.enabled {
            let key = self.field_key(key);
            self.fields.push(&key, &value);
        }
        self
    }

    /// Dictionaries take keys as given; a logger's event keeps the reserved
    /// names for itself.
    fn field_key<'k>(&self, key: &'k str) -> std::borrow::Cow<'k, str> {
        if self.target.is_some() {
            self.names.user_key(key)
        } else {
            std::borrow::Cow::Borrowed(key)
        }
    }

    const fn stack_enabled(&self) -> bool {
        self.stack
    }

    const fn field_names(&self) -> &Arc<FieldNames> {
        &self.names
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Event")
            .field("level", &self.level())
            .field("enabled", &self.enabled)
            .field("fields", &self.fields)
            .finish()
    }
}

fn encode_line(target: &Target, fields: &FieldBuf, message: &str) -> String {
    let logger = &target.logger;
    let names = logger.field_names();
    let mut line = FieldBuf::default();
    if target.level != Level::NoLevel {
        line.push(&names.level, &Value::from(target.level.as_str()));
    }
    line.extend(logger.context_fields());
    line.extend(fields);
    if logger.timestamp_enabled() {
        line.push(&names.time, &crate::fields::time_value(&chrono::Utc::now()));
    }
    if !message.is_empty() {
        line.push(&names.message, &Value::from(message));
    }
    line.into_line()
}
