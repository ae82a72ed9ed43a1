//! In-memory `Handler` doubles and value fixtures.
//!
//! These implementations are intended for:
//! - Facade tests that need a handler without a backend
//! - Asserting what a facade call delivered to its handler

use logbridge_ports::{Attr, Handler, Level, LogValue, Record, RequestContext};
use logbridge_shared::Result;
use std::sync::{Arc, Mutex};

/// A handler that accepts every level and writes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHandler;

impl Handler for NoopHandler {
    fn enabled(&self, _ctx: &RequestContext, _level: Level) -> bool {
        true
    }

    fn handle(&self, ctx: &RequestContext, _record: &Record) -> Result<()> {
        ctx.ensure_not_cancelled("noop_handler.handle")
    }

    fn with_attrs(&self, _attrs: &[Attr]) -> Arc<dyn Handler> {
        Arc::new(Self)
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
        Arc::new(Self)
    }
}

/// What a [`CapturingHandler`] saw for one record.
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    /// Record level.
    pub level: Level,
    /// Record message.
    pub message: String,
    /// Groups open on the handler, outermost first.
    pub groups: Vec<String>,
    /// Attributes bound on the handler.
    pub bound: Vec<Attr>,
    /// Record attributes.
    pub attrs: Vec<Attr>,
}

/// Handler that stores every record it handles, along with its bound state.
///
/// Derived handlers share the store with the handler they came from.
#[derive(Debug, Clone)]
pub struct CapturingHandler {
    min_level: Level,
    bound: Vec<Attr>,
    groups: Vec<String>,
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl CapturingHandler {
    /// Handler enabled at `min_level` and above.
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            bound: Vec::new(),
            groups: Vec::new(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Records handled so far, by this handler or any derived one.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().expect("captured records lock").clone()
    }
}

impl Handler for CapturingHandler {
    fn enabled(&self, _ctx: &RequestContext, level: Level) -> bool {
        level >= self.min_level
    }

    fn handle(&self, ctx: &RequestContext, record: &Record) -> Result<()> {
        ctx.ensure_not_cancelled("capturing_handler.handle")?;
        let mut attrs = Vec::with_capacity(record.num_attrs());
        record.attrs(|attr| {
            attrs.push(attr.clone());
            true
        });
        let captured = CapturedRecord {
            level: record.level,
            message: record.message.clone(),
            groups: self.groups.clone(),
            bound: self.bound.clone(),
            attrs,
        };
        self.records
            .lock()
            .expect("captured records lock")
            .push(captured);
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.bound.extend_from_slice(attrs);
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        if name.trim().is_empty() {
            return Arc::new(self.clone());
        }
        let mut derived = self.clone();
        derived.groups.push(name.to_string());
        Arc::new(derived)
    }
}

/// Open value with none of the error or display capabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque(pub serde_json::Value);

impl LogValue for Opaque {
    fn to_json(&self) -> serde_json::Value {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use logbridge_ports::Logger;

    #[test]
    fn capturing_handler_records_bound_state() {
        let handler = CapturingHandler::new(Level::INFO);
        let logger = Logger::new(Arc::new(handler.clone()))
            .with(&[Attr::string("service", "api")])
            .with_group("req")
            .with_group(" ");
        let ctx = RequestContext::new_request();

        logger.debug(&ctx, "skipped", []).unwrap();
        logger.info(&ctx, "kept", [Attr::int64("id", 1)]).unwrap();

        let records = handler.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.message, "kept");
        assert_eq!(record.groups, ["req"]);
        assert_eq!(record.bound[0].key, "service");
        assert_eq!(record.attrs[0].key, "id");
    }

    #[test]
    fn noop_handler_honours_cancellation() {
        let ctx = RequestContext::new_request();
        let record = Record::new(Utc::now(), Level::INFO, "m");
        assert!(NoopHandler.handle(&ctx, &record).is_ok());
        ctx.cancel();
        assert!(NoopHandler.handle(&ctx, &record).is_err());
    }

    #[test]
    fn opaque_has_no_capabilities() {
        let value = Opaque(serde_json::json!({"k": 1}));
        assert!(value.as_error().is_none());
        assert!(value.as_error_list().is_none());
        assert!(value.as_display().is_none());
        assert_eq!(value.to_json(), serde_json::json!({"k": 1}));
    }
}
