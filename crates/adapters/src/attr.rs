//! Attribute translation onto eventlog builders.
//!
//! Two paths share one dispatch table. [`append_attr`] writes into a per-call
//! [`Event`] (or a dictionary nested in one) and supports groups and the
//! generic serde fallback. [`append_ctx`] writes into a persistent
//! [`Context`]; groups and values with no typed setter are dropped there.

use logbridge_eventlog::{Context, Event};
use logbridge_ports::{Attr, LogValue, Value};

/// Deepest group nesting translated; groups below this depth are dropped.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Write `attr` into `event` and return the event for chaining.
///
/// Groups become nested dictionaries. Empty groups emit nothing, and a group
/// with an empty key has its children written inline.
#[must_use]
pub fn append_attr(event: Event, attr: &Attr) -> Event {
    append_at_depth(event, attr, 0)
}

fn append_at_depth(event: Event, attr: &Attr, depth: usize) -> Event {
    let key = attr.key.as_str();
    match &attr.value {
        Value::Bool(value) => event.bool(key, *value),
        Value::Duration(value) => event.dur(key, *value),
        Value::Float64(value) => event.float64(key, *value),
        Value::Int64(value) => event.int64(key, *value),
        Value::String(value) => event.str(key, value),
        Value::Time(value) => event.time(key, value),
        Value::Uint64(value) => event.uint64(key, *value),
        Value::Group(_) if attr.is_empty_group() => event,
        Value::Group(children) => append_group(event, key, children, depth),
        Value::Any(value) => append_any(event, key, value.as_ref()),
    }
}

fn append_group(event: Event, key: &str, children: &[Attr], depth: usize) -> Event {
    if depth >= MAX_GROUP_DEPTH {
        tracing::debug!(key, depth, "group nested too deep; dropped");
        return event;
    }
    if key.is_empty() {
        return children
            .iter()
            .fold(event, |event, child| append_at_depth(event, child, depth + 1));
    }
    let nested = children
        .iter()
        .fold(event.nested(), |nested, child| append_at_depth(nested, child, depth + 1));
    event.dict(key, nested)
}

fn append_any(event: Event, key: &str, value: &dyn LogValue) -> Event {
    if let Some(error) = value.as_error() {
        return event.err(error);
    }
    if let Some(errors) = value.as_error_list() {
        return event.stack().errs(key, errors);
    }
    if let Some(shown) = value.as_display() {
        return event.stringer(key, shown);
    }
    event.any(key, &value.to_json())
}

/// Bind `attr` into a persistent context and return it for chaining.
#[must_use]
pub fn append_ctx(context: Context, attr: &Attr) -> Context {
    let key = attr.key.as_str();
    match &attr.value {
        Value::Bool(value) => context.bool(key, *value),
        Value::Duration(value) => context.dur(key, *value),
        Value::Float64(value) => context.float64(key, *value),
        Value::Int64(value) => context.int64(key, *value),
        Value::String(value) => context.str(key, value),
        Value::Time(value) => context.time(key, value),
        Value::Uint64(value) => context.uint64(key, *value),
        Value::Group(_) => context,
        Value::Any(value) => {
            let value = value.as_ref();
            if let Some(error) = value.as_error() {
                context.err(error)
            } else if let Some(errors) = value.as_error_list() {
                context.stack().errs(key, errors)
            } else if let Some(shown) = value.as_display() {
                context.stringer(key, shown)
            } else {
                context
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_eventlog::Logger;
    use logbridge_testkit::{MemorySink, Unreachable};
    use serde_json::json;
    use std::sync::Arc;

    fn fixture() -> (Arc<MemorySink>, Logger) {
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::new(sink.clone());
        (sink, logger)
    }

    fn nest(depth: usize) -> Attr {
        (0..depth).fold(Attr::string("leaf", "x"), |inner, _| Attr::group("g", [inner]))
    }

    #[test]
    fn scalar_kinds_use_typed_setters() -> Result<(), Box<dyn std::error::Error>> {
        let (sink, logger) = fixture();
        let attrs = [
            Attr::bool("ok", true),
            Attr::int64("delta", -2),
            Attr::uint64("size", 9),
            Attr::float64("ratio", 0.25),
            Attr::string("name", "x"),
        ];

        attrs
            .iter()
            .fold(logger.info(), append_attr)
            .msg("m");

        let line = sink.json_lines()?;
        assert_eq!(line[0]["ok"], true);
        assert_eq!(line[0]["delta"], -2);
        assert_eq!(line[0]["size"], 9);
        assert_eq!(line[0]["ratio"], 0.25);
        assert_eq!(line[0]["name"], "x");
        Ok(())
    }

    #[test]
    fn empty_key_groups_are_inlined() -> Result<(), Box<dyn std::error::Error>> {
        let (sink, logger) = fixture();

        append_attr(
            logger.info(),
            &Attr::group("", [Attr::string("a", "1"), Attr::string("b", "2")]),
        )
        .send();

        let lines = sink.json_lines()?;
        assert_eq!(lines[0], json!({"level": "info", "a": "1", "b": "2"}));
        Ok(())
    }

    #[test]
    fn group_depth_is_capped() -> Result<(), Box<dyn std::error::Error>> {
        let (sink, logger) = fixture();

        append_attr(logger.info(), &nest(MAX_GROUP_DEPTH)).msg("kept");
        append_attr(logger.info(), &nest(MAX_GROUP_DEPTH + 1)).msg("dropped");

        let lines = sink.json_lines()?;
        let mut kept = &lines[0];
        for _ in 0..MAX_GROUP_DEPTH {
            kept = &kept["g"];
        }
        assert_eq!(kept["leaf"], "x");

        let mut dropped = &lines[1];
        for _ in 0..MAX_GROUP_DEPTH {
            dropped = &dropped["g"];
        }
        assert!(dropped.get("leaf").is_none());
        Ok(())
    }

    #[test]
    fn serde_fallback_serializes_unrecognized_values() -> Result<(), Box<dyn std::error::Error>> {
        let (sink, logger) = fixture();

        append_attr(logger.info(), &Attr::serde("ports", &[80, 443])).send();

        assert_eq!(sink.json_lines()?[0]["ports"], json!([80, 443]));
        Ok(())
    }

    #[test]
    fn context_path_drops_groups_and_untyped_values() -> Result<(), Box<dyn std::error::Error>> {
        let (sink, logger) = fixture();
        let attrs = [
            Attr::string("service", "api"),
            Attr::group("http", [Attr::string("method", "GET")]),
            Attr::serde("tags", &["a"]),
            Attr::display("peer", "10.0.0.1:80"),
            Attr::error("ignored-key", Arc::new(Unreachable)),
        ];

        let bound = attrs.iter().fold(logger.with(), append_ctx).logger();
        bound.info().msg("m");

        let lines = sink.json_lines()?;
        assert_eq!(
            lines[0],
            json!({
                "level": "info",
                "service": "api",
                "peer": "10.0.0.1:80",
                "error": "host unreachable",
                "message": "m",
            })
        );
        Ok(())
    }
}
