//! Handler contract.

use crate::attr::Attr;
use crate::level::Level;
use crate::record::Record;
use logbridge_shared::{RequestContext, Result};
use std::sync::Arc;

/// Backend side of the facade.
///
/// Handlers are immutable once built: [`Handler::with_attrs`] and
/// [`Handler::with_group`] return new handlers and leave the receiver as it
/// was, so a handler can be shared across threads and derived from freely.
pub trait Handler: Send + Sync {
    /// Returns true when records at `level` would be written.
    ///
    /// Callers use this to skip building records that would be discarded.
    fn enabled(&self, ctx: &RequestContext, level: Level) -> bool;

    /// Write `record`.
    ///
    /// # Errors
    ///
    /// Returns a cancelled error when `ctx` has been cancelled; nothing is
    /// written in that case.
    fn handle(&self, ctx: &RequestContext, record: &Record) -> Result<()>;

    /// Handler that also writes `attrs` with every record.
    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;

    /// Handler that nests subsequent record attributes under `name`.
    ///
    /// Implementations return an equivalent handler when `name` is empty or
    /// whitespace.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}
