//! Demo command: logs a few representative records through the bridge.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::wiring::build_logger;
use logbridge_config::ValidatedLoggerConfig;
use logbridge_ports::{Attr, Logger, RequestContext};
use std::sync::Arc;
use std::time::Duration;

/// Run the demo command.
pub fn run_demo(config: &ValidatedLoggerConfig) -> Result<CliOutput, CliError> {
    let logger = build_logger(config);
    let ctx = RequestContext::new_request();
    write_demo_records(&logger, &ctx)?;

    Ok(CliOutput {
        stdout: String::new(),
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

fn write_demo_records(logger: &Logger, ctx: &RequestContext) -> Result<(), CliError> {
    logger
        .info(
            ctx,
            "Hey this is a test",
            [
                Attr::string("serviceId", "34320feihsfhesfhesi"),
                Attr::string("userId", "jkratz"),
                Attr::group(
                    "http",
                    [
                        Attr::string("method", "GET"),
                        Attr::string("browser", "CHROME"),
                    ],
                ),
            ],
        )
        .map_err(CliError::Log)?;

    let service = logger.with(&[Attr::string("serviceId", "34320feihsfhesfhesi")]);
    service
        .with_group("http")
        .info(
            ctx,
            "request served",
            [
                Attr::string("path", "/users/jkratz"),
                Attr::int64("status", 200),
                Attr::duration("took", Duration::from_millis(42)),
            ],
        )
        .map_err(CliError::Log)?;

    service
        .error(
            ctx,
            "upstream call failed",
            [
                Attr::error(
                    "error",
                    Arc::new(std::io::Error::other("connection reset by peer")),
                ),
                Attr::string("upstream", "billing"),
            ],
        )
        .map_err(CliError::Log)
}
