// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

/**
A sink that writes each line to stderr or stdout.

Stderr is the default: hosted environments collect it as the process log.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy/Eq/Hash: the sink is just a stream selector
// - Default: stderr
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: automatic

impl ConsoleSink {
    pub const fn new(stream: Stream) -> Self {
        Self { stream }
    }

    pub const fn stderr() -> Self {
        Self::new(Stream::Stderr)
    }

    pub const fn stdout() -> Self {
        Self::new(Stream::Stdout)
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }
}

fn write_record(mut out: impl Write, record: &LogRecord) -> std::io::Result<()> {
    for part in &record.parts {
        out.write_all(part.as_bytes())?;
    }
    out.write_all(b"\n")
}

impl Sink for ConsoleSink {
    fn emit(&self, record: LogRecord) {
        // a closed console loses the line
        let _ = match self.stream {
            Stream::Stderr => write_record(std::io::stderr().lock(), &record),
            Stream::Stdout => write_record(std::io::stdout().lock(), &record),
        };
    }

    fn flush(&self) {
        let _ = match self.stream {
            Stream::Stderr => std::io::stderr().flush(),
            Stream::Stdout => std::io::stdout().flush(),
        };
    }
}
