//! Reserved field names and value encoders shared by events and contexts.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::borrow::Cow;
use std::error::Error;
use std::time::Duration;

/// Names of the fields the logger writes on its own behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Timestamp field (`time`).
    pub time: String,
    /// Level field (`level`).
    pub level: String,
    /// Message field (`message`).
    pub message: String,
    /// Field written by `err` (`error`).
    pub error: String,
    /// Field holding an error's cause chain when stack output is on (`stack`).
    pub stack: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            time: "time".to_string(),
            level: "level".to_string(),
            message: "message".to_string(),
            error: "error".to_string(),
            stack: "stack".to_string(),
        }
    }
}

impl FieldNames {
    /// `key`, or `fields.<key>` when it would shadow the level, time or
    /// message field of a line.
    pub(crate) fn user_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if key == self.level || key == self.time || key == self.message {
            Cow::Owned(format!("fields.{key}"))
        } else {
            Cow::Borrowed(key)
        }
    }
}

/// Encoded `"key":value` pairs, comma separated and without braces.
///
/// Fields are only ever appended, so repeated keys are all written in the
/// order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldBuf(String);

impl FieldBuf {
    pub(crate) fn push(&mut self, key: &str, value: &Value) {
        self.push_key(key);
        self.0.push_str(&value.to_string());
    }

    /// Append `inner` as an object under `key`.
    pub(crate) fn push_object(&mut self, key: &str, inner: &Self) {
        self.push_key(key);
        self.0.push('{');
        self.0.push_str(&inner.0);
        self.0.push('}');
    }

    /// Append every field of `other`.
    pub(crate) fn extend(&mut self, other: &Self) {
        if other.0.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(',');
        }
        self.0.push_str(&other.0);
    }

    /// Close the fields into one newline-terminated JSON object.
    pub(crate) fn into_line(self) -> String {
        format!("{{{}}}\n", self.0)
    }

    fn push_key(&mut self, key: &str) {
        if !self.0.is_empty() {
            self.0.push(',');
        }
        self.0.push_str(&Value::from(key).to_string());
        self.0.push(':');
    }
}

/// Durations are written as fractional milliseconds.
pub(crate) fn duration_value(duration: Duration) -> Value {
    Value::from(duration.as_secs_f64() * 1_000.0)
}

/// Times are written as RFC 3339 with second precision.
pub(crate) fn time_value(time: &DateTime<Utc>) -> Value {
    Value::String(time.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Messages of every `source()` below `error`, outermost first.
pub(crate) fn cause_chain(error: &(dyn Error + 'static)) -> Value {
    let mut causes = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        causes.push(Value::String(cause.to_string()));
        current = cause.source();
    }
    Value::Array(causes)
}

/// One `errs` entry: the bare message, or message plus causes when stacked.
pub(crate) fn error_entry(error: &(dyn Error + 'static), stack: bool) -> Value {
    if !stack {
        return Value::String(error.to_string());
    }
    let mut entry = serde_json::Map::new();
    entry.insert("message".to_string(), Value::String(error.to_string()));
    entry.insert("causes".to_string(), cause_chain(error));
    Value::Object(entry)
}
