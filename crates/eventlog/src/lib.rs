//! # logbridge-eventlog
//!
//! A leveled, zero-configuration JSON event logger.
//!
//! Log calls open an [`Event`] at a [`Level`], chain typed field setters onto
//! it, and finish with [`Event::msg`], which writes exactly one JSON line to a
//! [`LogSink`]. Persistent fields are bound with [`Logger::with`], which
//! returns a [`Context`] builder that produces a new [`Logger`].
//!
//! ```
//! use logbridge_eventlog::{Level, Logger, StderrLogSink, dict};
//! use std::sync::Arc;
//!
//! let logger = Logger::new(Arc::new(StderrLogSink))
//!     .level(Level::Info)
//!     .with()
//!     .str("service", "api")
//!     .logger();
//!
//! logger
//!     .info()
//!     .dict("http", dict().str("method", "GET"))
//!     .msg("request served");
//! ```
//!
//! This crate depends on no workspace crate.

mod context;
mod event;
mod fields;
mod level;
mod logger;
mod setters;
pub mod sink;

pub use context::Context;
pub use event::{Event, dict};
pub use fields::FieldNames;
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
pub use sink::{LogSink, StderrLogSink, StdoutLogSink};

/// Returns the eventlog crate version.
#[must_use]
pub const fn eventlog_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
