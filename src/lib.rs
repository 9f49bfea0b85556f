//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logx

logx adds three things to plain line logging: a short source location in
front of every line, column-aligned output, and stack traces on demand.

# The problem

A log line that says `connection reset` is only useful once you know where it
came from. Full paths (`/home/ci/build/checkouts/server/src/net/conn.rs`) are
noise, and a bare file name (`main.rs`) is ambiguous. Lines of different
lengths also make logs hard to scan when the interesting field starts at a
different column every time.

logx prints the file with a couple of its directories, the line, and pads
each field to a tab stop:

```text
net/conn.rs:88      connection reset
handlers/users.rs:140  user 42 loaded
```

# The API

```rust
use logx::{Config, Logger};
use std::sync::Arc;

let logger = Logger::new(Config::default(), Arc::new(logx::ConsoleSink::stderr()));
logger.printf(format_args!("listening on {}", 8080));
logger.print_traced(format_args!("unexpected state"));
```

The same calls are available as macros over a process-wide logger:

```rust
logx::printf!("listening on {}", 8080);
logx::print_stack_trace!();
```

The `log` facade can be pointed at a logx [`Logger`] with
[`install_log_bridge`].

# Source locations

Locations come from walking the call stack at the time of the call (see
[`stack`]), so they need debug info: the default `dev` profile has it, a
release build needs `debug = "line-tables-only"` or more. Without it, lines are
prefixed with `<unknown>:0`.

Each logging method knows how many frames separate it from its caller. If
you wrap the logger in a function of your own, raise [`Config::base_skip`]
by one per wrapper so the location points at your wrapper's caller.

# Multithreading

A [`Logger`] is `Send + Sync` and stack walking only reads the calling
thread's own stack. The global logger can be replaced from any thread at any
time; see [`global_logger`](mod@global_logger).

# Request context

[`Logger::debug_request`] adds the path of the HTTP request being served to a
debug line. Build with the `managed_hosting` feature when the host already
tags log entries with their request, and the path is left out.
*/

mod column;
pub mod config;
mod console_sink;
mod error;
pub mod global_logger;
mod inmemory_sink;
mod log_bridge;
mod log_record;
pub mod logger;
mod macros;
mod request;
mod sink;
pub mod stack;
mod writer_sink;

pub use column::{GUTTER, pad};
pub use config::Config;
pub use console_sink::{ConsoleSink, Stream};
pub use error::LogxError;
pub use global_logger::{global_logger, log_to, set_global_logger};
pub use inmemory_sink::InMemorySink;
pub use log_bridge::{LogBridge, install_log_bridge};
pub use log_record::LogRecord;
pub use logger::Logger;
pub use request::{
    ContextualDebug, PathAnnotatedDebug, PlainDebug, drop_leading_segment, select_debug_strategy,
};
pub use sink::{DiscardSink, Sink};
pub use stack::{StackFrame, StackWalker, shorten_path};
pub use writer_sink::WriterSink;
