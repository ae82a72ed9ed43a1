//! Result alias.

use crate::errors::ErrorEnvelope;

/// `Result` whose error defaults to [`ErrorEnvelope`].
pub type Result<T, E = ErrorEnvelope> = std::result::Result<T, E>;
