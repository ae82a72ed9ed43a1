//! Error fixtures: shared envelopes and plain `std::error::Error` types.

use logbridge_ports::SharedError;
use logbridge_shared::{ErrorCode, ErrorEnvelope};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A cancellation error fixture.
pub fn cancelled_error() -> ErrorEnvelope {
    ErrorEnvelope::cancelled("cancelled")
}

/// An invalid input error fixture.
pub fn invalid_input_error() -> ErrorEnvelope {
    ErrorEnvelope::expected(ErrorCode::invalid_input(), "invalid input")
}

/// Leaf error displaying as `host unreachable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unreachable;

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("host unreachable")
    }
}

impl Error for Unreachable {}

/// Error with an optional source, for cause-chain assertions.
#[derive(Debug)]
pub struct Layered {
    message: String,
    source: Option<Box<Self>>,
}

impl Layered {
    /// Chain of errors, outermost first: `Layered::chain(["a", "b"])`
    /// displays `a` and has `b` as its source.
    pub fn chain<'a>(messages: impl IntoIterator<Item = &'a str>) -> Self {
        let messages: Vec<&str> = messages.into_iter().collect();
        let mut current: Option<Self> = None;
        for message in messages.into_iter().rev() {
            current = Some(Self {
                message: message.to_string(),
                source: current.map(Box::new),
            });
        }
        current.unwrap_or_else(|| Self {
            message: String::new(),
            source: None,
        })
    }
}

impl fmt::Display for Layered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Layered {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}

/// Shared error list with `count` leaf errors.
pub fn unreachable_list(count: usize) -> Vec<SharedError> {
    (0..count)
        .map(|_| Arc::new(Unreachable) as SharedError)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layered_chain_links_sources() {
        let error = Layered::chain(["top", "middle", "root"]);
        assert_eq!(error.to_string(), "top");
        let middle = error.source().expect("middle");
        assert_eq!(middle.to_string(), "middle");
        let root = middle.source().expect("root");
        assert_eq!(root.to_string(), "root");
        assert!(root.source().is_none());
    }

    #[test]
    fn envelope_fixtures_carry_codes() {
        assert!(cancelled_error().is_cancelled());
        assert_eq!(invalid_input_error().code, ErrorCode::invalid_input());
        assert_eq!(unreachable_list(3).len(), 3);
    }
}
