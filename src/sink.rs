// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/// Destination for finished log lines.
pub trait Sink: Debug + Send + Sync {
    /**
    Writes one line.

    Sinks must not panic or report failures: a broken destination loses the
    line, it does not take the program down.
    */
    fn emit(&self, record: LogRecord);

    /**
    The application may imminently exit.  Ensure buffered lines are written.
    */
    fn flush(&self);
}

/// Drops every line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn emit(&self, _record: LogRecord) {}

    fn flush(&self) {}
}

/*
Boilerplate notes.

# Sink

Clone on Sink would duplicate file handles and buffers, so it's not part of the trait.
PartialEq is unclear (same destination? same contents?), skip.
Default is not sensible for the trait since who knows where a sink writes to.
Send/Sync are required: a Logger is shared across threads.
*/
