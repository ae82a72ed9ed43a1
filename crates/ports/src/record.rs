//! Log records.

use crate::attr::Attr;
use crate::level::Level;
use chrono::{DateTime, Utc};

/// One log call: when, how severe, what, and its attributes in call order.
#[derive(Debug, Clone)]
pub struct Record {
    /// Time of the call.
    pub time: DateTime<Utc>,
    /// Severity.
    pub level: Level,
    /// Message text.
    pub message: String,
    attrs: Vec<Attr>,
}

impl Record {
    /// Record without attributes.
    pub fn new(time: DateTime<Utc>, level: Level, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    /// Append attributes.
    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    /// Builder form of [`Record::add_attrs`].
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.add_attrs(attrs);
        self
    }

    /// Number of attributes.
    #[must_use]
    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    /// Visit attributes in order until `visit` returns false.
    pub fn attrs<F>(&self, mut visit: F)
    where
        F: FnMut(&Attr) -> bool,
    {
        for attr in &self.attrs {
            if !visit(attr) {
                break;
            }
        }
    }
}
