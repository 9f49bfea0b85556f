// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/**
A sink over any [`Write`] implementation, such as a file or a socket.

Lines are written whole under a lock, so lines from different threads never
interleave. Write errors drop the line.

```
use logx::{LogRecord, Sink, WriterSink};

let sink = WriterSink::new(Vec::new());
let mut record = LogRecord::new();
record.log("hello");
sink.emit(record);
assert_eq!(sink.into_inner(), b"hello\n");
```
*/
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with the underlying writer locked.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send + std::fmt::Debug,
{
    fn emit(&self, record: LogRecord) {
        let mut line = record.to_string();
        line.push('\n');
        self.with_writer(|writer| {
            let _ = writer.write_all(line.as_bytes());
        });
    }

    fn flush(&self) {
        self.with_writer(|writer| {
            let _ = writer.flush();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("gone"))
        }
    }

    #[test]
    fn lines_are_newline_terminated() {
        let sink = WriterSink::new(Vec::new());
        for text in ["a", "b"] {
            let mut record = LogRecord::new();
            record.log(text);
            sink.emit(record);
        }
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }

    #[test]
    fn write_errors_are_swallowed() {
        let sink = WriterSink::new(Broken);
        sink.emit(LogRecord::new());
        sink.flush();
    }
}
