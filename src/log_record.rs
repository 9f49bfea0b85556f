// SPDX-License-Identifier: MIT OR Apache-2.0

//! One log line on its way to a [`Sink`](crate::Sink).
//!
//! A [`LogRecord`] keeps the pieces of a line (timestamp, location prefix,
//! body, trace) as separate parts and only joins them when a sink writes the
//! line out. Sinks that write to a stream can write each part directly.
//!
//! ```rust
//! use logx::LogRecord;
//!
//! let mut record = LogRecord::new();
//! record.log("app/main.rs:12  ");
//! record.log_owned(format!("request #{}", 42));
//! assert_eq!(record.to_string(), "app/main.rs:12  request #42");
//! ```

use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Instant;

static INITIAL_TIMESTAMP: OnceLock<Instant> = OnceLock::new();

fn initial_timestamp() -> Instant {
    *INITIAL_TIMESTAMP.get_or_init(Instant::now)
}

/**
A formatted log line, kept as its parts.

Records are built by a [`Logger`](crate::Logger) and passed by value to its
sink. They never contain the trailing newline; sinks add their own line
terminator.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a borrowed part.
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /// Appends a part, taking ownership of it.
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /**
    Appends the time since the first timestamp of the process, followed by a space.
    */
    pub fn log_timestamp(&mut self) {
        let duration = Instant::now().duration_since(initial_timestamp());
        self.log_owned(format!("[{:?}] ", duration));
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(String::is_empty)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_join_without_separators() {
        let mut record = LogRecord::new();
        record.log("a");
        record.log_owned("b".to_string());
        record.log("");
        assert_eq!(record.to_string(), "ab");
        assert_eq!(record.parts().len(), 3);
    }

    #[test]
    fn empty_parts_make_an_empty_record() {
        let mut record = LogRecord::new();
        assert!(record.is_empty());
        record.log("");
        assert!(record.is_empty());
        record.log("x");
        assert!(!record.is_empty());
    }

    #[test]
    fn timestamp_is_bracketed() {
        let mut record = LogRecord::new();
        record.log_timestamp();
        let line = record.to_string();
        assert!(line.starts_with('['), "{line}");
        assert!(line.ends_with("] "), "{line}");
    }
}
