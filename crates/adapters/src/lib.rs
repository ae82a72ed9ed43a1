//! # logbridge-adapters
//!
//! Facade handler implemented on the eventlog backend.
//!
//! - [`level`]: mapping between facade levels and eventlog levels
//! - [`attr`]: translation of typed attributes into eventlog setters
//! - [`handler`]: [`EventLogHandler`], the `Handler` implementation
//!
//! ```
//! use logbridge_adapters::EventLogHandler;
//! use logbridge_eventlog::{Level, Logger, StderrLogSink};
//! use logbridge_ports::{Attr, Logger as FacadeLogger, RequestContext};
//! use std::sync::Arc;
//!
//! let backend = Logger::new(Arc::new(StderrLogSink)).level(Level::Info);
//! let logger = FacadeLogger::new(Arc::new(EventLogHandler::new(backend)));
//! let ctx = RequestContext::new_request();
//!
//! let _ = logger.info(&ctx, "started", [Attr::string("service", "api")]);
//! ```
//!
//! This crate depends on `ports`, `shared`, and `eventlog`.

pub mod attr;
pub mod handler;
pub mod level;

pub use attr::{MAX_GROUP_DEPTH, append_attr, append_ctx};
pub use handler::{EventLogHandler, STACKTRACE_FIELD};
pub use level::{
    LEVEL_DEBUG, LEVEL_ERROR, LEVEL_FATAL, LEVEL_INFO, LEVEL_PANIC, LEVEL_TRACE, LEVEL_WARN,
    to_backend, to_facade,
};

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
