//! Builds the façade logger from a validated config.

use logbridge_adapters::EventLogHandler;
use logbridge_config::{OutputTarget, ValidatedLoggerConfig};
use logbridge_eventlog::{LogSink, Logger as Backend, StderrLogSink, StdoutLogSink};
use logbridge_ports::Logger;
use std::sync::Arc;

pub fn sink_for(output: OutputTarget) -> Arc<dyn LogSink> {
    match output {
        OutputTarget::Stderr => Arc::new(StderrLogSink),
        OutputTarget::Stdout => Arc::new(StdoutLogSink),
    }
}

/// Backend logger honoring every config setting.
pub fn build_backend(config: &ValidatedLoggerConfig, sink: Arc<dyn LogSink>) -> Backend {
    let backend = Backend::new(sink)
        .with_field_names(config.field_names().clone())
        .level(config.level());

    let mut context = backend.with();
    if config.timestamp {
        context = context.timestamp();
    }
    if config.error_stack {
        context = context.stack();
    }
    context.logger()
}

pub fn build_logger(config: &ValidatedLoggerConfig) -> Logger {
    let backend = build_backend(config, sink_for(config.output));
    tracing::debug!(
        level = %config.level(),
        output = %config.output,
        timestamp = config.timestamp,
        "backend logger ready"
    );
    Logger::new(Arc::new(EventLogHandler::new(backend)))
}
