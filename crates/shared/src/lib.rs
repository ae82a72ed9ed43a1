//! # logbridge-shared
//!
//! Error envelope and per-call context used by every logbridge crate.
//!
//! - [`ErrorEnvelope`]: namespaced code, kind, retry class, message, metadata
//! - [`RequestContext`]: correlation id and cancellation flag passed to handlers
//!
//! This crate has no workspace dependencies.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod context;
pub mod errors;
pub mod result;

pub use context::{CancellationToken, CorrelationId, RequestContext};
pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use result::Result;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
