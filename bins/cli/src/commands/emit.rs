//! Emit command: logs one record built from command-line arguments.

use crate::CliOutput;
use crate::attr_arg::AttrArg;
use crate::error::{CliError, ExitCode};
use crate::wiring::build_logger;
use logbridge_config::ValidatedLoggerConfig;
use logbridge_ports::{Level, RequestContext};

/// Inputs for the emit command.
#[derive(Debug)]
pub struct EmitCommandInput<'a> {
    pub level: Level,
    pub message: &'a str,
    pub attrs: &'a [AttrArg],
    pub groups: &'a [String],
}

/// Run the emit command.
pub fn run_emit(
    config: &ValidatedLoggerConfig,
    input: &EmitCommandInput<'_>,
) -> Result<CliOutput, CliError> {
    let logger = input
        .groups
        .iter()
        .fold(build_logger(config), |logger, group| logger.with_group(group));
    let ctx = RequestContext::new_request();

    tracing::debug!(
        correlation_id = %ctx.correlation_id(),
        record_level = %input.level,
        attrs = input.attrs.len(),
        groups = input.groups.len(),
        "emitting record"
    );
    logger
        .log(
            &ctx,
            input.level,
            input.message,
            input.attrs.iter().map(AttrArg::to_attr),
        )
        .map_err(CliError::Log)?;

    Ok(CliOutput {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
