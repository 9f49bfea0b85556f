// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! [`InMemorySink`] keeps log lines in memory instead of writing them out.
//! It exists for tests that need to look at what was logged, and for
//! programs that want to show recent log output somewhere other than a
//! console.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, PoisonError};

/// A sink that stores lines in a `Vec<String>`.
///
/// # Example
///
/// ```rust
/// use logx::{Config, InMemorySink, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::new(Config::default(), sink.clone());
///
/// logger.printf(format_args!("Test message {}", 42));
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("Test message 42"));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    logs: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Sink
// - Default: empty buffer
// - Clone: NOT implemented - share it with Arc instead
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is racy
// - Send/Sync: automatic through Mutex

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Joins all stored lines with newlines and clears the buffer.
    ///
    /// ```rust
    /// use logx::{InMemorySink, LogRecord, Sink};
    ///
    /// let sink = InMemorySink::new();
    /// let mut record = LogRecord::new();
    /// record.log("first");
    /// sink.emit(record);
    ///
    /// assert_eq!(sink.drain_logs(), "first");
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// Takes the stored lines without joining them.
    pub fn drain_lines(&self) -> Vec<String> {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *logs)
    }

    /// Writes all stored lines to stderr and clears the buffer.
    pub fn drain_to_console(&self) {
        for line in self.drain_lines() {
            eprintln!("{}", line);
        }
    }
}

impl Sink for InMemorySink {
    fn emit(&self, record: LogRecord) {
        let line = record.to_string();
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }

    fn flush(&self) {
        // nothing buffered outside the Vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn record(text: &str) -> LogRecord {
        let mut record = LogRecord::new();
        record.log(text);
        record
    }

    #[test]
    fn drain_lines_keeps_order() {
        let sink = InMemorySink::new();
        sink.emit(record("one"));
        sink.emit(record("two"));
        assert_eq!(sink.drain_lines(), vec!["one", "two"]);
        assert!(sink.drain_lines().is_empty());
    }

    #[test]
    fn concurrent_emits_are_all_kept() {
        let sink = Arc::new(InMemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        sink.emit(record(&format!("{i}-{j}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("Thread should complete successfully");
        }
        assert_eq!(sink.drain_lines().len(), 100);
    }
}
