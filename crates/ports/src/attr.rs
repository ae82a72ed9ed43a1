//! Key/value attributes.

use crate::value::{DisplayValue, ErrorListValue, ErrorValue, LogValue, SerdeValue, SharedError, Value};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A keyed value attached to a record or bound to a handler.
#[derive(Debug, Clone)]
pub struct Attr {
    /// Field name. May be empty for groups, in which case handlers inline
    /// or drop them.
    pub key: String,
    /// Payload.
    pub value: Value,
}

impl Attr {
    /// Attribute from any value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Boolean attribute.
    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    /// Duration attribute.
    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    /// Float attribute.
    pub fn float64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float64(value))
    }

    /// Signed integer attribute.
    pub fn int64(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, Value::Int64(value))
    }

    /// String attribute.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    /// Timestamp attribute.
    pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(key, Value::Time(value))
    }

    /// Unsigned integer attribute.
    pub fn uint64(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, Value::Uint64(value))
    }

    /// Group of child attributes, kept in order.
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Self>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }

    /// Error attribute.
    pub fn error(key: impl Into<String>, error: SharedError) -> Self {
        Self::any(key, ErrorValue(error))
    }

    /// Error-list attribute.
    pub fn errors(key: impl Into<String>, errors: impl IntoIterator<Item = SharedError>) -> Self {
        Self::any(key, ErrorListValue(errors.into_iter().collect()))
    }

    /// Attribute rendered through `Display`.
    pub fn display<T>(key: impl Into<String>, value: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::any(key, DisplayValue(value))
    }

    /// Attribute holding the serde rendering of `value`.
    pub fn serde<T>(key: impl Into<String>, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self::any(key, SerdeValue::new(value))
    }

    /// Attribute with an arbitrary open payload.
    pub fn any(key: impl Into<String>, value: impl LogValue + 'static) -> Self {
        Self::new(key, Value::Any(Arc::new(value)))
    }

    /// Returns true for a group with no children.
    #[must_use]
    pub fn is_empty_group(&self) -> bool {
        matches!(&self.value, Value::Group(attrs) if attrs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;

    #[test]
    fn constructors_pick_matching_kinds() {
        assert_eq!(Attr::bool("b", true).value.kind(), Kind::Bool);
        assert_eq!(Attr::int64("i", -1).value.kind(), Kind::Int64);
        assert_eq!(
            Attr::duration("d", Duration::from_secs(1)).value.kind(),
            Kind::Duration
        );
        assert_eq!(Attr::display("ip", "10.0.0.1").value.kind(), Kind::Any);
        assert_eq!(Attr::serde("tags", &["a"]).value.kind(), Kind::Any);
    }

    #[test]
    fn group_preserves_child_order() {
        let group = Attr::group(
            "http",
            [Attr::string("method", "GET"), Attr::int64("status", 200)],
        );
        let keys: Vec<&str> = match &group.value {
            Value::Group(children) => children.iter().map(|attr| attr.key.as_str()).collect(),
            _ => Vec::new(),
        };
        assert_eq!(keys, ["method", "status"]);
        assert!(!group.is_empty_group());
        assert!(Attr::group("empty", []).is_empty_group());
        assert!(!Attr::string("empty", "").is_empty_group());
    }
}
