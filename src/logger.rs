// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Logger`]: location prefixes, column layout and stack traces.
//!
//! # Skip depths
//!
//! A logging method finds the code that called it by asking the
//! [`StackWalker`] for a frame some levels up. The number of levels is fixed
//! per method and published as a `*_SKIP` constant in this module. The
//! walker counts from the function that asks it, which is always a private
//! helper called directly by the public method, so most constants are
//! [`CALLER`]: one frame for the helper and one for the method.
//!
//! A method that calls another logging method, or a helper that calls a
//! helper, would shift every location by one frame. New methods must ask the
//! walker through exactly one helper and get their own constant.
//!
//! [`Config::base_skip`] is added on top, for applications that wrap the
//! logger in functions of their own.

use crate::column::pad;
use crate::config::Config;
use crate::console_sink::ConsoleSink;
use crate::error::LogxError;
use crate::log_record::LogRecord;
use crate::request::{ContextualDebug, select_debug_strategy};
use crate::sink::Sink;
use crate::stack::{StackFrame, StackSource, StackWalker, shorten_path};
use std::fmt::Arguments;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Frames between the walker and the caller of a logging method.
pub const CALLER: usize = 2;

pub const LOCATION_PREFIX_SKIP: usize = CALLER;
pub const PRINT_SKIP: usize = CALLER;
pub const PRINTF_SKIP: usize = CALLER;
pub const PRINT_TRACED_SKIP: usize = CALLER;
/// The caller is already named by the prefix, so the trace starts above it.
pub const PRINT_TRACED_TRACE_SKIP: usize = CALLER + 1;
pub const STACK_TRACE_SKIP: usize = CALLER;
pub const PRINT_STACK_TRACE_SKIP: usize = CALLER;
pub const DEBUG_REQUEST_SKIP: usize = CALLER;
/// [`Logger::source_dir`] asks the walker itself, without a helper.
pub const SOURCE_DIR_SKIP: usize = 1;

/**
Writes lines prefixed with the caller's source location.

```
use logx::{Config, InMemorySink, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::new(Config::default(), sink.clone());
logger.printf(format_args!("listening on port {}", 8080));

let line = sink.drain_logs();
assert!(line.contains("listening on port 8080"));
```

A disabled logger drops lines before doing any stack walking or formatting.
*/
#[derive(Debug)]
pub struct Logger {
    config: Config,
    sink: Arc<dyn Sink>,
    walker: StackWalker,
    debug_strategy: Arc<dyn ContextualDebug>,
    enabled: AtomicBool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default(), Arc::new(ConsoleSink::stderr()))
    }
}

impl Logger {
    /// A logger over the native call stack, using the build's debug strategy.
    pub fn new(config: Config, sink: Arc<dyn Sink>) -> Self {
        Self {
            config,
            sink,
            walker: StackWalker::native(),
            debug_strategy: select_debug_strategy(),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn with_stack_source(mut self, source: Arc<dyn StackSource>) -> Self {
        self.walker = StackWalker::new(source);
        self
    }

    pub fn with_debug_strategy(mut self, strategy: Arc<dyn ContextualDebug>) -> Self {
        self.debug_strategy = strategy;
        self
    }

    /// Same settings, different destination.
    pub fn with_sink(&self, sink: Arc<dyn Sink>) -> Self {
        Self {
            config: self.config.clone(),
            sink,
            walker: self.walker.clone(),
            debug_strategy: self.debug_strategy.clone(),
            enabled: AtomicBool::new(self.is_enabled()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Writes out anything the sink buffers.
    pub fn flush(&self) {
        self.sink.flush();
    }

    /// Padded `path:line` of the caller, or an empty string when the stack
    /// cannot be read.
    #[inline(never)]
    pub fn location_prefix(&self) -> String {
        self.prefix_at(LOCATION_PREFIX_SKIP).unwrap_or_default()
    }

    /// Like [`Logger::location_prefix`], reporting why no prefix exists.
    #[inline(never)]
    pub fn try_location_prefix(&self) -> Result<String, LogxError> {
        // not a tail call, or optimized builds would drop this frame
        black_box(self.prefix_at(LOCATION_PREFIX_SKIP))
    }

    /// Location prefix followed by the message as is.
    ///
    /// One trailing newline is dropped, since the sink ends the line itself.
    #[inline(never)]
    pub fn print(&self, args: Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let prefix = self.prefix_at(PRINT_SKIP).unwrap_or_default();
        self.write_line(prefix, without_terminator(args.to_string()), None);
    }

    /// Location prefix followed by the message, with trailing newlines removed
    /// and the message padded to the body columns.
    #[inline(never)]
    pub fn printf(&self, args: Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let prefix = self.prefix_at(PRINTF_SKIP).unwrap_or_default();
        let body = self.pad_body(&args.to_string());
        self.write_line(prefix, body, None);
    }

    /// Like [`Logger::print`], followed by a trace of the frames above the
    /// caller, [`Config::trace_frames`] deep.
    #[inline(never)]
    pub fn print_traced(&self, args: Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let prefix = self.prefix_at(PRINT_TRACED_SKIP).unwrap_or_default();
        let trace = self.render_trace(
            PRINT_TRACED_TRACE_SKIP,
            self.config.trace_frames,
            self.config.trailing_dirs,
        );
        self.write_line(prefix, without_terminator(args.to_string()), Some(trace));
    }

    /**
    Renders `count` frames, starting at the caller plus `extra_skip`.

    Each frame is a padded `path:line` on its own line, indented by a tab.
    The text starts with a newline so it can follow a message directly.
    */
    #[inline(never)]
    pub fn stack_trace(&self, extra_skip: usize, count: usize, trailing_dirs: usize) -> String {
        black_box(self.render_trace(STACK_TRACE_SKIP + extra_skip, count, trailing_dirs))
    }

    /// Logs [`Logger::stack_trace`] under the caller's location prefix, laid
    /// out like a [`Logger::printf`] body.
    #[inline(never)]
    pub fn print_stack_trace(&self, extra_skip: usize, count: usize, trailing_dirs: usize) {
        if !self.is_enabled() {
            return;
        }
        let prefix = self.prefix_at(PRINT_STACK_TRACE_SKIP).unwrap_or_default();
        let trace = self.render_trace(PRINT_STACK_TRACE_SKIP + extra_skip, count, trailing_dirs);
        let body = self.pad_body(&trace);
        self.write_line(prefix, body, None);
    }

    /// A debug line about the request at `request_path`.
    ///
    /// The logger's [`ContextualDebug`] strategy decides how the request shows
    /// up in the line; the result is laid out like [`Logger::printf`].
    #[inline(never)]
    pub fn debug_request(&self, request_path: &str, args: Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let prefix = self.prefix_at(DEBUG_REQUEST_SKIP).unwrap_or_default();
        let message = self.debug_strategy.decorate(request_path, args.to_string());
        let body = self.pad_body(&message);
        self.write_line(prefix, body, None);
    }

    /**
    Directory of the caller's source file, or of a frame `levels_up` above it.

    Useful to find data files that sit next to the source, independent of
    the working directory. Requires debug info.
    */
    #[inline(never)]
    pub fn source_dir(&self, levels_up: usize) -> Result<PathBuf, LogxError> {
        let file = self
            .walker
            .source_file(self.config.base_skip + SOURCE_DIR_SKIP + levels_up)?;
        Ok(file.parent().map(Path::to_path_buf).unwrap_or_default())
    }

    /// Logs with a location supplied by the caller instead of the stack.
    pub fn print_at(&self, file: &str, line: u32, args: Arguments<'_>) {
        if !self.is_enabled() {
            return;
        }
        let frame = StackFrame {
            line,
            path: shorten_path(file, self.config.trailing_dirs),
        };
        let prefix = self.format_location(&frame);
        let body = self.pad_body(&args.to_string());
        self.write_line(prefix, body, None);
    }

    #[inline(never)]
    fn prefix_at(&self, skip: usize) -> Result<String, LogxError> {
        let frame = self
            .walker
            .frame_at(self.config.base_skip + skip, self.config.trailing_dirs)?;
        Ok(self.format_location(&frame))
    }

    #[inline(never)]
    fn render_trace(&self, skip: usize, count: usize, trailing_dirs: usize) -> String {
        let entries: Vec<String> = self
            .walker
            .trace(self.config.base_skip + skip, count, trailing_dirs)
            .iter()
            .map(|frame| {
                pad(
                    &frame.to_string(),
                    self.config.trace_min_width,
                    self.config.trace_column_width,
                )
            })
            .collect();
        format!("\n\t{}", entries.join("\n\t"))
    }

    fn format_location(&self, frame: &StackFrame) -> String {
        pad(
            &frame.to_string(),
            self.config.prefix_min_width,
            self.config.column_width,
        )
    }

    fn pad_body(&self, message: &str) -> String {
        pad(
            message.trim_end_matches('\n'),
            self.config.body_min_width,
            self.config.body_column_width,
        )
    }

    fn write_line(&self, prefix: String, body: String, trace: Option<String>) {
        let mut record = LogRecord::new();
        if self.config.timestamps {
            record.log_timestamp();
        }
        record.log_owned(prefix);
        record.log_owned(body);
        if let Some(trace) = trace {
            record.log_owned(trace);
        }
        self.sink.emit(record);
    }
}

fn without_terminator(mut message: String) -> String {
    if message.ends_with('\n') {
        message.pop();
    }
    message
}
