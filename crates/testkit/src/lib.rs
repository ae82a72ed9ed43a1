//! # logbridge-testkit
//!
//! Test helpers and in-memory doubles.
//! This crate depends on `eventlog`, `ports`, and `shared`.

pub mod errors;
pub mod in_memory;
pub mod sink;

pub use errors::{Layered, Unreachable};
pub use in_memory::{CapturedRecord, CapturingHandler, NoopHandler, Opaque};
pub use sink::MemorySink;

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbridge_eventlog::eventlog_crate_version;
    use logbridge_ports::ports_crate_version;

    #[test]
    fn testkit_crate_compiles() {
        let version = testkit_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn testkit_can_use_eventlog_and_ports() {
        assert!(!eventlog_crate_version().is_empty());
        assert!(!ports_crate_version().is_empty());
    }

    #[test]
    fn error_fixtures_are_available() {
        assert!(errors::cancelled_error().is_cancelled());
        assert_eq!(Unreachable.to_string(), "host unreachable");
    }
}
