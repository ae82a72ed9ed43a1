//! `key=value` arguments and the facade levels accepted on the command line.

use chrono::{DateTime, Utc};
use logbridge_adapters::{
    LEVEL_DEBUG, LEVEL_ERROR, LEVEL_FATAL, LEVEL_INFO, LEVEL_PANIC, LEVEL_TRACE, LEVEL_WARN,
};
use logbridge_ports::{Attr, Level};

/// Raw `key=value` pair from `--attr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrArg {
    pub key: String,
    pub value: String,
}

impl AttrArg {
    /// Typed attribute; the value kind is inferred from its text.
    pub fn to_attr(&self) -> Attr {
        infer_attr(&self.key, &self.value)
    }
}

/// Clap value parser for `--attr`.
pub fn parse_attr_arg(input: &str) -> Result<AttrArg, String> {
    let Some((key, value)) = input.split_once('=') else {
        return Err(format!("expected key=value, got {input:?}"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err("attribute key must be non-empty".to_string());
    }
    Ok(AttrArg {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Clap value parser for `--level`: a level name or a signed integer rank.
pub fn parse_level_arg(input: &str) -> Result<Level, String> {
    let normalized = input.trim().to_ascii_lowercase();
    let level = match normalized.as_str() {
        "trace" => LEVEL_TRACE,
        "debug" => LEVEL_DEBUG,
        "info" => LEVEL_INFO,
        "warn" | "warning" => LEVEL_WARN,
        "error" => LEVEL_ERROR,
        "panic" => LEVEL_PANIC,
        "fatal" => LEVEL_FATAL,
        other => other.parse::<i32>().map(Level::new).map_err(|_| {
            format!("unknown level {input:?}; use trace, debug, info, warn, error, panic, fatal or an integer")
        })?,
    };
    Ok(level)
}

fn infer_attr(key: &str, raw: &str) -> Attr {
    match raw {
        "true" => return Attr::bool(key, true),
        "false" => return Attr::bool(key, false),
        _ => {},
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Attr::int64(key, value);
    }
    if let Ok(value) = raw.parse::<f64>()
        && value.is_finite()
    {
        return Attr::float64(key, value);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Attr::time(key, value.with_timezone(&Utc));
    }
    Attr::string(key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_ports::{Kind, Value};

    fn kind_of(raw: &str) -> Kind {
        infer_attr("k", raw).value.kind()
    }

    #[test]
    fn values_are_typed_by_inference() {
        assert_eq!(kind_of("true"), Kind::Bool);
        assert_eq!(kind_of("-42"), Kind::Int64);
        assert_eq!(kind_of("2.5"), Kind::Float64);
        assert_eq!(kind_of("2024-05-06T07:08:09Z"), Kind::Time);
        assert_eq!(kind_of("GET"), Kind::String);
        assert_eq!(kind_of("NaN"), Kind::String);
        assert_eq!(kind_of(""), Kind::String);
    }

    #[test]
    fn attr_args_split_on_first_equals() -> Result<(), String> {
        let arg = parse_attr_arg("query=a=b")?;
        assert_eq!(arg.key, "query");
        assert!(matches!(arg.to_attr().value, Value::String(ref text) if text == "a=b"));

        assert!(parse_attr_arg("novalue").is_err());
        assert!(parse_attr_arg(" =x").is_err());
        Ok(())
    }

    #[test]
    fn level_names_and_ranks_parse() -> Result<(), String> {
        assert_eq!(parse_level_arg("WARN")?, LEVEL_WARN);
        assert_eq!(parse_level_arg("fatal")?, LEVEL_FATAL);
        assert_eq!(parse_level_arg("3")?, Level::new(3));
        assert!(parse_level_arg("loud").is_err());
        Ok(())
    }
}
