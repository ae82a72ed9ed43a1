//! Typed attribute values.
//!
//! A [`Value`] is a closed set of kinds. The [`Kind::Any`] payload is an open
//! trait object whose capabilities ([`LogValue::as_error`],
//! [`LogValue::as_error_list`], [`LogValue::as_display`]) let handlers pick
//! a richer representation before falling back to [`LogValue::to_json`].

use crate::attr::Attr;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Shareable error, as carried by error-valued attributes.
pub type SharedError = Arc<dyn Error + Send + Sync>;

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Open payload; see [`LogValue`].
    Any,
    /// `bool`.
    Bool,
    /// `std::time::Duration`.
    Duration,
    /// `f64`.
    Float64,
    /// `i64`.
    Int64,
    /// `String`.
    String,
    /// UTC timestamp.
    Time,
    /// `u64`.
    Uint64,
    /// Ordered child attributes.
    Group,
}

/// Payload of an attribute.
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Duration.
    Duration(Duration),
    /// 64-bit float.
    Float64(f64),
    /// Signed integer.
    Int64(i64),
    /// String.
    String(String),
    /// UTC timestamp.
    Time(DateTime<Utc>),
    /// Unsigned integer.
    Uint64(u64),
    /// Ordered child attributes; carries no scalar of its own.
    Group(Vec<Attr>),
    /// Anything else.
    Any(Arc<dyn LogValue>),
}

impl Value {
    /// Kind of the payload.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Duration(_) => Kind::Duration,
            Self::Float64(_) => Kind::Float64,
            Self::Int64(_) => Kind::Int64,
            Self::String(_) => Kind::String,
            Self::Time(_) => Kind::Time,
            Self::Uint64(_) => Kind::Uint64,
            Self::Group(_) => Kind::Group,
            Self::Any(_) => Kind::Any,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

/// Capabilities of an open (`Kind::Any`) payload.
///
/// Handlers test the capabilities in order (error, error list, display)
/// and use [`LogValue::to_json`] when none applies.
pub trait LogValue: fmt::Debug + Send + Sync {
    /// The payload viewed as a single error.
    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        None
    }

    /// The payload viewed as a list of errors.
    fn as_error_list(&self) -> Option<&[SharedError]> {
        None
    }

    /// The payload viewed as something with a textual rendering.
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Generic structural rendering.
    fn to_json(&self) -> serde_json::Value;
}

/// A single error.
#[derive(Debug, Clone)]
pub struct ErrorValue(pub SharedError);

impl LogValue for ErrorValue {
    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.0.to_string())
    }
}

/// A list of errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorListValue(pub Vec<SharedError>);

impl LogValue for ErrorListValue {
    fn as_error_list(&self) -> Option<&[SharedError]> {
        Some(&self.0)
    }

    fn to_json(&self) -> serde_json::Value {
        self.0
            .iter()
            .map(|error| serde_json::Value::String(error.to_string()))
            .collect()
    }
}

/// Anything rendered through `Display`.
#[derive(Debug, Clone)]
pub struct DisplayValue<T>(pub T);

impl<T> LogValue for DisplayValue<T>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(&self.0)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::String(self.0.to_string())
    }
}

/// A serializable value captured as JSON when the attribute is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SerdeValue(serde_json::Value);

impl SerdeValue {
    /// Capture `value`. Serialization failures are kept as a string.
    pub fn new<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self(
            serde_json::to_value(value)
                .unwrap_or_else(|error| serde_json::Value::String(format!("!ERROR {error}"))),
        )
    }
}

impl LogValue for SerdeValue {
    fn to_json(&self) -> serde_json::Value {
        self.0.clone()
    }
}
