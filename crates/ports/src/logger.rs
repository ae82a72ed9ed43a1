//! Application-facing logger.

use crate::attr::Attr;
use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;
use chrono::Utc;
use logbridge_shared::{RequestContext, Result};
use std::sync::Arc;

/// Thin front end over a shared [`Handler`].
///
/// Every call checks [`Handler::enabled`] before building a record, so
/// filtered-out calls cost one virtual call.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Logger over `handler`.
    #[must_use]
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Underlying handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Logger whose records carry `attrs`.
    #[must_use]
    pub fn with(&self, attrs: &[Attr]) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self::new(self.handler.with_attrs(attrs))
    }

    /// Logger whose record attributes are nested under `name`.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        Self::new(self.handler.with_group(name))
    }

    /// See [`Handler::enabled`].
    #[must_use]
    pub fn enabled(&self, ctx: &RequestContext, level: Level) -> bool {
        self.handler.enabled(ctx, level)
    }

    /// Log `message` at `level` with `attrs`.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error (for example a cancelled context).
    pub fn log(
        &self,
        ctx: &RequestContext,
        level: Level,
        message: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        if !self.handler.enabled(ctx, level) {
            return Ok(());
        }
        let record = Record::new(Utc::now(), level, message).with_attrs(attrs);
        self.handler.handle(ctx, &record)
    }

    /// Log at [`Level::DEBUG`].
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn debug(
        &self,
        ctx: &RequestContext,
        message: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        self.log(ctx, Level::DEBUG, message, attrs)
    }

    /// Log at [`Level::INFO`].
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn info(
        &self,
        ctx: &RequestContext,
        message: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        self.log(ctx, Level::INFO, message, attrs)
    }

    /// Log at [`Level::WARN`].
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn warn(
        &self,
        ctx: &RequestContext,
        message: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        self.log(ctx, Level::WARN, message, attrs)
    }

    /// Log at [`Level::ERROR`].
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn error(
        &self,
        ctx: &RequestContext,
        message: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        self.log(ctx, Level::ERROR, message, attrs)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorded {
        bound: Vec<String>,
        groups: Vec<String>,
        records: Vec<(Level, String, usize)>,
    }

    struct RecordingHandler {
        min: Level,
        bound: Vec<String>,
        groups: Vec<String>,
        out: Arc<Mutex<Recorded>>,
    }

    impl RecordingHandler {
        fn new(min: Level) -> (Arc<Self>, Arc<Mutex<Recorded>>) {
            let out = Arc::new(Mutex::new(Recorded::default()));
            let handler = Arc::new(Self {
                min,
                bound: Vec::new(),
                groups: Vec::new(),
                out: Arc::clone(&out),
            });
            (handler, out)
        }
    }

    impl Handler for RecordingHandler {
        fn enabled(&self, _ctx: &RequestContext, level: Level) -> bool {
            level >= self.min
        }

        fn handle(&self, ctx: &RequestContext, record: &Record) -> Result<()> {
            ctx.ensure_not_cancelled("recording.handle")?;
            let mut out = self.out.lock().expect("recorded lock");
            out.bound.clone_from(&self.bound);
            out.groups.clone_from(&self.groups);
            out.records
                .push((record.level, record.message.clone(), record.num_attrs()));
            Ok(())
        }

        fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
            let mut bound = self.bound.clone();
            bound.extend(attrs.iter().map(|attr| attr.key.clone()));
            Arc::new(Self {
                min: self.min,
                bound,
                groups: self.groups.clone(),
                out: Arc::clone(&self.out),
            })
        }

        fn with_group(&self, name: &str) -> Arc<dyn Handler> {
            let mut groups = self.groups.clone();
            groups.push(name.to_string());
            Arc::new(Self {
                min: self.min,
                bound: self.bound.clone(),
                groups,
                out: Arc::clone(&self.out),
            })
        }
    }

    #[test]
    fn filtered_levels_never_reach_handle() {
        let (handler, out) = RecordingHandler::new(Level::WARN);
        let logger = Logger::new(handler);
        let ctx = RequestContext::new_request();

        assert!(logger.info(&ctx, "quiet", []).is_ok());
        assert!(logger.error(&ctx, "loud", [Attr::int64("n", 1)]).is_ok());

        let out = out.lock().expect("recorded lock");
        assert_eq!(out.records, vec![(Level::ERROR, "loud".to_string(), 1)]);
    }

    #[test]
    fn derived_loggers_route_through_handler() {
        let (handler, out) = RecordingHandler::new(Level::DEBUG);
        let logger = Logger::new(handler)
            .with(&[Attr::string("service", "api")])
            .with_group("req");
        let ctx = RequestContext::new_request();

        assert!(logger.debug(&ctx, "m", []).is_ok());

        let out = out.lock().expect("recorded lock");
        assert_eq!(out.bound, ["service"]);
        assert_eq!(out.groups, ["req"]);
    }

    #[test]
    fn cancelled_context_surfaces_error() {
        let (handler, out) = RecordingHandler::new(Level::DEBUG);
        let logger = Logger::new(handler);
        let ctx = RequestContext::new_request();
        ctx.cancel();

        let result = logger.warn(&ctx, "late", []);
        assert!(result.is_err_and(|error| error.is_cancelled()));
        assert!(out.lock().expect("recorded lock").records.is_empty());
    }
}
