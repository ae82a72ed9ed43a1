//! Config command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use clap::ValueEnum;
use logbridge_config::{ValidatedLoggerConfig, to_pretty_json, to_pretty_toml};

/// Serialization used by `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    /// Pretty JSON.
    #[default]
    Json,
    /// Pretty TOML.
    Toml,
}

/// Print the effective config.
pub fn run_config_show(
    config: &ValidatedLoggerConfig,
    format: ConfigFormat,
) -> Result<CliOutput, CliError> {
    let rendered = match format {
        ConfigFormat::Json => to_pretty_json(config.as_ref()),
        ConfigFormat::Toml => to_pretty_toml(config.as_ref()),
    }
    .map_err(CliError::Config)?;

    Ok(CliOutput {
        stdout: rendered,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
