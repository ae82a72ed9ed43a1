//! Persistent-field builder.

use crate::fields::{FieldBuf, FieldNames};
use crate::logger::Logger;
use crate::setters::typed_setters;
use serde_json::Value;
use std::sync::Arc;

/// Builder for fields bound to every event of a derived logger.
///
/// Only typed scalar setters and errors are available; nested dictionaries
/// and arbitrary serializable values cannot be bound. Keys follow the same
/// rules as [`crate::Event`] fields.
#[derive(Debug, Clone)]
pub struct Context {
    logger: Logger,
    fields: FieldBuf,
    timestamp: bool,
    stack: bool,
}

impl Context {
    pub(crate) fn new(logger: Logger, fields: FieldBuf) -> Self {
        let timestamp = logger.timestamp_enabled();
        let stack = logger.stack_enabled();
        Self {
            logger,
            fields,
            timestamp,
            stack,
        }
    }

    typed_setters!();

    /// Add the current time to every event at write time.
    #[must_use]
    pub const fn timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Render errors with their cause chains on the derived logger.
    #[must_use]
    pub const fn stack(mut self) -> Self {
        self.stack = true;
        self
    }

    /// Finish binding and return the derived logger.
    #[must_use]
    pub fn logger(self) -> Logger {
        self.logger.rebind(self.fields, self.timestamp, self.stack)
    }

    fn put(mut self, key: &str, value: Value) -> Self {
        let key = self.logger.field_names().user_key(key);
        self.fields.push(&key, &value);
        self
    }

    #[allow(clippy::unused_self, reason = "shared setter contract with Event")]
    const fn is_enabled(&self) -> bool {
        true
    }

    const fn stack_enabled(&self) -> bool {
        self.stack
    }

    const fn field_names(&self) -> &Arc<FieldNames> {
        self.logger.field_names()
    }
}
