//! # logbridge-ports
//!
//! The structured logging facade: levels, typed attributes, records, and the
//! [`Handler`] contract that backends implement.
//!
//! Application code logs through [`Logger`]; a `Handler` decides whether a
//! level is enabled, turns each [`Record`] into output, and derives new
//! handlers with bound attributes or open groups. This crate depends only
//! on `shared`.

pub mod attr;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod value;

pub use attr::Attr;
pub use handler::Handler;
pub use level::Level;
pub use logger::Logger;
pub use record::Record;
pub use value::{
    DisplayValue, ErrorListValue, ErrorValue, Kind, LogValue, SerdeValue, SharedError, Value,
};

// Re-export the request context used in handler signatures, so adapter
// crates can implement `Handler` without depending on `logbridge-shared`.
pub use logbridge_shared::{CancellationToken, CorrelationId, RequestContext};

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
