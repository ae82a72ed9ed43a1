//! In-memory line sink.

use logbridge_eventlog::LogSink;
use serde_json::Value;
use std::sync::Mutex;

/// Sink capturing every line written to it.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Drain captured lines.
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().expect("memory sink lock");
        std::mem::take(&mut *guard)
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.lock().expect("memory sink lock").len()
    }

    /// Returns true when nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain captured lines and parse each as JSON.
    pub fn json_lines(&self) -> Result<Vec<Value>, serde_json::Error> {
        self.take()
            .iter()
            .map(|line| serde_json::from_str(line.trim_end()))
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        let mut guard = self.lines.lock().expect("memory sink lock");
        guard.push(line.to_string());
    }
}
