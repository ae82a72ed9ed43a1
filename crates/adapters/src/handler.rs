//! Facade handler backed by an eventlog [`Logger`].

use crate::attr::{MAX_GROUP_DEPTH, append_attr, append_ctx};
use crate::level::{to_backend, to_facade};
use logbridge_eventlog::{Event, Level as BackendLevel, Logger};
use logbridge_ports::{Attr, Handler, Level, Record, RequestContext};
use logbridge_shared::Result;
use std::backtrace::Backtrace;
use std::sync::Arc;

/// Field holding the captured stack trace on error-or-worse records.
pub const STACKTRACE_FIELD: &str = "stacktrace";

/// One open group; frames link from innermost to outermost and are shared
/// between handlers forked from a common ancestor.
#[derive(Debug)]
struct GroupFrame {
    name: String,
    depth: usize,
    parent: Option<Arc<GroupFrame>>,
}

/// [`Handler`] writing records through an eventlog [`Logger`].
///
/// Bound attributes live in the logger's persistent context; open groups
/// form a persistent chain. Both are fixed at construction, so derived
/// handlers never affect the handler they came from.
#[derive(Debug, Clone)]
pub struct EventLogHandler {
    logger: Logger,
    groups: Option<Arc<GroupFrame>>,
}

impl EventLogHandler {
    /// Handler over a configured logger, with no open group.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self {
            logger,
            groups: None,
        }
    }

    /// Logger records are written through, including bound attributes.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    #[cfg(test)]
    fn group_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut frame = self.groups.as_deref();
        while let Some(current) = frame {
            names.push(current.name.as_str());
            frame = current.parent.as_deref();
        }
        names.reverse();
        names
    }

    fn group_depth(&self) -> usize {
        self.groups.as_ref().map_or(0, |frame| frame.depth)
    }
}

impl Handler for EventLogHandler {
    fn enabled(&self, _ctx: &RequestContext, level: Level) -> bool {
        level >= to_facade(self.logger.get_level())
    }

    fn handle(&self, ctx: &RequestContext, record: &Record) -> Result<()> {
        if let Err(error) = ctx.ensure_not_cancelled("eventlog_handler.handle") {
            tracing::trace!(
                correlation_id = %ctx.correlation_id(),
                record_level = %record.level,
                "record dropped: context cancelled"
            );
            return Err(error);
        }

        let level = to_backend(record.level);
        let mut event = self.logger.with_level(level);
        if captures_stack(level) && event.is_enabled() {
            event = event.str(STACKTRACE_FIELD, &Backtrace::force_capture().to_string());
        }

        let event = match self.groups.as_deref() {
            None => append_record(event, record),
            Some(innermost) => {
                let mut nested = append_record(event.nested(), record);
                let mut frame = innermost;
                while let Some(parent) = frame.parent.as_deref() {
                    nested = event.nested().dict(&frame.name, nested);
                    frame = parent;
                }
                event.dict(&frame.name, nested)
            }
        };
        event.msg(&record.message);
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let logger = attrs.iter().fold(self.logger.with(), append_ctx).logger();
        Arc::new(Self {
            logger,
            groups: self.groups.clone(),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        if name.trim().is_empty() {
            return Arc::new(self.clone());
        }
        let depth = self.group_depth();
        if depth >= MAX_GROUP_DEPTH {
            tracing::debug!(group = name, depth, "group nested too deep; ignored");
            return Arc::new(self.clone());
        }
        let frame = GroupFrame {
            name: name.to_string(),
            depth: depth + 1,
            parent: self.groups.clone(),
        };
        Arc::new(Self {
            logger: self.logger.clone(),
            groups: Some(Arc::new(frame)),
        })
    }
}

const fn captures_stack(level: BackendLevel) -> bool {
    matches!(
        level,
        BackendLevel::Error | BackendLevel::Panic | BackendLevel::Fatal
    )
}

fn append_record(target: Event, record: &Record) -> Event {
    let mut slot = Some(target);
    record.attrs(|attr| {
        slot = slot.take().map(|target| append_attr(target, attr));
        true
    });
    slot.unwrap_or_else(logbridge_eventlog::dict)
}
