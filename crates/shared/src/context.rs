//! Per-call context: a correlation id plus a cancellation flag.
//!
//! Log emission is synchronous, so cancellation is only ever checked once at
//! the start of a call; a flag flipped mid-call is observed by the next one.

use crate::{ErrorCode, ErrorEnvelope, Result};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static NEXT_REQUEST: AtomicU64 = AtomicU64::new(1);

/// Identifier tying diagnostics of one call together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(Arc<str>);

impl CorrelationId {
    /// Fresh `req_<n>` id, unique within the process.
    #[must_use]
    pub fn generate() -> Self {
        let n = NEXT_REQUEST.fetch_add(1, Ordering::Relaxed);
        Self(Arc::from(format!("req_{n}")))
    }

    /// Caller-supplied id; surrounding whitespace is dropped and blank ids
    /// are rejected with `core:invalid_input`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "" => Err(ErrorEnvelope::expected(
                ErrorCode::invalid_input(),
                "correlation id must be non-empty",
            )),
            trimmed => Ok(Self(Arc::from(trimmed))),
        }
    }

    /// The id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Cancellation flag; clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Calling it again has no effect.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`CancellationToken::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Context handed to every handler call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    correlation_id: CorrelationId,
    token: CancellationToken,
}

impl RequestContext {
    /// Context with a generated correlation id and its own token.
    #[must_use]
    pub fn new_request() -> Self {
        Self::with_token(CorrelationId::generate(), CancellationToken::new())
    }

    /// Context sharing `token` with other contexts.
    #[must_use]
    pub const fn with_token(correlation_id: CorrelationId, token: CancellationToken) -> Self {
        Self {
            correlation_id,
            token,
        }
    }

    /// Correlation id of this call.
    #[must_use]
    pub const fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Clone of the cancellation token.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel this context and every context sharing its token.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the context is cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// `Err(core:cancelled)` naming `operation` when cancelled.
    pub fn ensure_not_cancelled(&self, operation: &'static str) -> Result<()> {
        if !self.is_cancelled() {
            return Ok(());
        }
        Err(ErrorEnvelope::cancelled(format!("{operation} cancelled"))
            .with_metadata("operation", operation)
            .with_metadata("correlationId", self.correlation_id.as_str()))
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_ids_are_trimmed_and_non_blank() {
        assert!(CorrelationId::parse(" \t").is_err());
        assert!(CorrelationId::parse(" abc ").is_ok_and(|id| id.as_str() == "abc"));
    }

    #[test]
    fn generated_ids_differ() {
        let first = CorrelationId::generate();
        let second = CorrelationId::generate();
        assert!(first.as_str().starts_with("req_"));
        assert_ne!(first, second);
    }

    #[test]
    fn contexts_sharing_a_token_cancel_together() {
        let token = CancellationToken::new();
        let a = RequestContext::with_token(CorrelationId::generate(), token.clone());
        let b = RequestContext::with_token(CorrelationId::generate(), token);
        assert!(b.ensure_not_cancelled("b").is_ok());

        a.cancel();
        assert!(b.is_cancelled());
        assert!(b.token().is_cancelled());
    }

    #[test]
    fn cancelled_error_names_operation_and_request() -> std::result::Result<(), String> {
        let ctx = RequestContext::new_request();
        ctx.cancel();

        let error = ctx
            .ensure_not_cancelled("eventlog_handler.handle")
            .err()
            .ok_or("expected cancellation")?;

        assert!(error.is_cancelled());
        assert_eq!(
            error.metadata_value("operation"),
            Some("eventlog_handler.handle")
        );
        assert_eq!(
            error.metadata_value("correlationId"),
            Some(ctx.correlation_id().as_str())
        );
        Ok(())
    }
}
