//! # logbridge-config
//!
//! Configuration schema, validation, and loading for the eventlog logger the
//! bridge writes through. The handler itself takes no configuration; this
//! crate only builds the settings a `logbridge_eventlog::Logger` is created
//! from.
//!
//! This crate depends on `eventlog` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigSchemaError, FieldNamesConfig, LoggerConfig, OutputTarget,
    ValidatedLoggerConfig, parse_logger_config_json, parse_logger_config_toml,
};

pub use env::{EnvParseError, LoggerEnv, apply_env_overrides};
pub use load::{
    load_logger_config_from_path, load_logger_config_from_sources, load_logger_config_std_env,
    to_pretty_json, to_pretty_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_eventlog::eventlog_crate_version;
    use logbridge_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        let version = config_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn config_can_use_eventlog_and_shared() {
        assert!(!eventlog_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
