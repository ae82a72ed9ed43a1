//! Line sinks receiving encoded events.

use std::io::Write;

/// A sink that receives pre-formatted log lines.
///
/// Implementations must be safe to call from many threads at once; the
/// logger performs no locking of its own.
pub trait LogSink: Send + Sync {
    /// Write a line to the sink. The line already ends with `\n`.
    fn write_line(&self, line: &str);
}

/// Writes each line to the process stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) {
        report(write_locked(std::io::stderr().lock(), line));
    }
}

/// Writes each line to the process stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogSink;

impl LogSink for StdoutLogSink {
    fn write_line(&self, line: &str) {
        report(write_locked(std::io::stdout().lock(), line));
    }
}

fn write_locked(mut out: impl Write, line: &str) -> std::io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()
}

// Failed lines are dropped after a note on stderr.
fn report(result: std::io::Result<()>) {
    if let Err(error) = result {
        eprintln!("log sink write failed: {error}");
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use super::LogSink;
    use std::sync::Mutex;

    /// Keeps every written line for later inspection.
    #[derive(Debug, Default)]
    pub(crate) struct Captured {
        lines: Mutex<Vec<String>>,
    }

    impl Captured {
        /// Drain the lines written so far.
        pub(crate) fn take(&self) -> Vec<String> {
            self.lines.lock().map(|mut lines| std::mem::take(&mut *lines)).unwrap_or_default()
        }
    }

    impl LogSink for Captured {
        fn write_line(&self, line: &str) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(line.to_string());
            }
        }
    }
}
