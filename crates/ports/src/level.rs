//! Facade severity scale.

use std::fmt;

/// Importance of a record. Higher ranks are more severe.
///
/// Only four ranks are named here; handlers may define others (any `i32` is
/// a valid level) and the ordering is plain integer ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    /// Debugging detail.
    pub const DEBUG: Self = Self(-4);
    /// Routine information.
    pub const INFO: Self = Self(0);
    /// Something unexpected but recoverable.
    pub const WARN: Self = Self(4);
    /// A failure.
    pub const ERROR: Self = Self(8);

    /// Level with an arbitrary rank.
    #[must_use]
    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    /// Numeric rank.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Level {
    /// Named levels print as `DEBUG`, `INFO`, `WARN`, `ERROR`; others print
    /// relative to the nearest named level below, e.g. `INFO+2`, `DEBUG-1`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = if *self < Self::INFO {
            ("DEBUG", Self::DEBUG)
        } else if *self < Self::WARN {
            ("INFO", Self::INFO)
        } else if *self < Self::ERROR {
            ("WARN", Self::WARN)
        } else {
            ("ERROR", Self::ERROR)
        };
        let offset = i64::from(self.0) - i64::from(base.0);
        if offset == 0 {
            formatter.write_str(name)
        } else {
            write!(formatter, "{name}{offset:+}")
        }
    }
}
