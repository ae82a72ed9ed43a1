//! Level mapping between the facade scale and eventlog levels.
//!
//! The facade only names debug, info, warn and error; the bridge adds trace,
//! panic and fatal ranks around them so every eventlog severity has a facade
//! counterpart.

use logbridge_eventlog::Level as BackendLevel;
use logbridge_ports::Level;

/// Bridge rank for eventlog `trace`.
pub const LEVEL_TRACE: Level = Level::new(-5);
/// Facade debug.
pub const LEVEL_DEBUG: Level = Level::DEBUG;
/// Facade info.
pub const LEVEL_INFO: Level = Level::INFO;
/// Facade warn.
pub const LEVEL_WARN: Level = Level::WARN;
/// Facade error.
pub const LEVEL_ERROR: Level = Level::ERROR;
/// Bridge rank for eventlog `panic`.
pub const LEVEL_PANIC: Level = Level::new(9);
/// Bridge rank for eventlog `fatal`.
pub const LEVEL_FATAL: Level = Level::new(10);

/// Map a facade level onto the eventlog scale.
///
/// `LEVEL_FATAL` maps to [`BackendLevel::Panic`]: a log call never takes the
/// backend's exiting path. Unnamed ranks map to [`BackendLevel::NoLevel`].
#[must_use]
pub const fn to_backend(level: Level) -> BackendLevel {
    match level {
        LEVEL_TRACE => BackendLevel::Trace,
        LEVEL_DEBUG => BackendLevel::Debug,
        LEVEL_INFO => BackendLevel::Info,
        LEVEL_WARN => BackendLevel::Warn,
        LEVEL_ERROR => BackendLevel::Error,
        LEVEL_PANIC | LEVEL_FATAL => BackendLevel::Panic,
        _ => BackendLevel::NoLevel,
    }
}

/// Map an eventlog level back onto the facade scale.
///
/// The sentinels (`NoLevel`, `Disabled`) map to `LEVEL_TRACE`, the most
/// verbose rank.
#[must_use]
pub const fn to_facade(level: BackendLevel) -> Level {
    match level {
        BackendLevel::Debug => LEVEL_DEBUG,
        BackendLevel::Info => LEVEL_INFO,
        BackendLevel::Warn => LEVEL_WARN,
        BackendLevel::Error => LEVEL_ERROR,
        BackendLevel::Panic => LEVEL_PANIC,
        BackendLevel::Fatal => LEVEL_FATAL,
        BackendLevel::Trace | BackendLevel::NoLevel | BackendLevel::Disabled => LEVEL_TRACE,
    }
}
