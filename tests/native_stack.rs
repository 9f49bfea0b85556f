// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locations reported against the real call stack.
//!
//! Every call under test sits on the same source line as a `line!()`, so the
//! expected line is known exactly. Needs debug info; the release profile of
//! this package keeps line tables so `cargo test --release` checks inlining.

use logx::stack::StackWalker;
use logx::{Config, InMemorySink, Logger, set_global_logger};
use std::hint::black_box;
use std::path::Path;
use std::sync::{Arc, Mutex};

static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

fn capturing_logger(config: Config) -> (Logger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    (Logger::new(config, sink.clone()), sink)
}

fn here(line: u32) -> String {
    format!("native_stack.rs:{line}")
}

#[inline(never)]
fn fixture_prefix(logger: &Logger) -> (String, u32) {
    (logger.location_prefix(), line!())
}

#[inline(never)]
fn fixture_printf(logger: &Logger) -> u32 {
    (logger.printf(format_args!("from fixture")), line!()).1
}

#[inline(never)]
fn fixture_traced(logger: &Logger) -> u32 {
    (logger.print_traced(format_args!("traced")), line!()).1
}

#[inline(never)]
fn fixture_trace(logger: &Logger) -> (String, u32) {
    (logger.stack_trace(0, 2, 1), line!())
}

/// An application-side wrapper around the logger.
#[inline(never)]
fn app_log(logger: &Logger, message: &str) {
    logger.printf(format_args!("{message}"));
    // keeps the call out of tail position in optimized builds
    black_box(message);
}

#[test]
fn walker_reports_its_caller() {
    let walker = StackWalker::native();
    let (frame, line) = (walker.frame_at(0, 0), line!());
    let frame = frame.expect("caller frame");
    assert_eq!(frame.path, "native_stack.rs");
    assert_eq!(frame.line, line);
}

#[test]
fn location_prefix_names_fixture_line() {
    let (logger, _sink) = capturing_logger(Config::default());
    let (prefix, line) = fixture_prefix(&logger);
    assert!(prefix.contains(&here(line)), "{prefix:?} should name line {line}");
    assert!(prefix.trim_end().ends_with(&here(line)));
}

#[test]
fn printf_names_fixture_line() {
    let (logger, sink) = capturing_logger(Config::default());
    let line = fixture_printf(&logger);
    let logs = sink.drain_logs();
    assert!(logs.contains(&here(line)), "{logs:?} should name line {line}");
    assert!(logs.contains("from fixture"));
}

#[test]
fn print_traced_starts_trace_at_callers_caller() {
    let (logger, sink) = capturing_logger(Config::default().with_trace_frames(2));
    let (fixture_line, caller_line) = (fixture_traced(&logger), line!());
    let logs = sink.drain_logs();
    let mut rows = logs.split("\n\t");
    let head = rows.next().expect("head line");
    assert!(head.contains(&here(fixture_line)), "{head:?}");
    let first = rows.next().expect("first trace row");
    assert!(first.contains(&here(caller_line)), "{first:?}");
}

#[test]
fn stack_trace_walks_upward() {
    let (logger, _sink) = capturing_logger(Config::default());
    let ((trace, fixture_line), caller_line) = (fixture_trace(&logger), line!());
    let rows: Vec<&str> = trace.trim_start_matches("\n\t").split("\n\t").collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains(&here(fixture_line)), "{rows:?}");
    assert!(rows[1].contains(&here(caller_line)), "{rows:?}");
}

#[test]
fn base_skip_reports_wrapper_caller() {
    let (logger, sink) = capturing_logger(Config::default().with_base_skip(1));
    let (_, line) = (app_log(&logger, "wrapped"), line!());
    let logs = sink.drain_logs();
    assert!(logs.contains(&here(line)), "{logs:?} should name line {line}");
}

#[test]
fn source_dir_is_tests_directory() {
    let (logger, _sink) = capturing_logger(Config::default());
    let dir = logger.source_dir(0).expect("source dir");
    assert!(dir.ends_with(Path::new("tests")), "{dir:?}");
}

#[test]
fn trace_ends_at_top_of_stack() {
    let walker = StackWalker::native();
    let trace = walker.trace(0, 100_000, 0);
    assert!(trace.len() < 100_000);
    assert!(walker.frame_at(100_000, 0).is_err());
}

#[test]
fn global_macros_name_call_site() {
    let _guard = TEST_LOGGER_GUARD.lock().unwrap();
    let (logger, sink) = capturing_logger(Config::default());
    set_global_logger(logger);

    let (_, line) = (logx::printf!("via macro {}", 1), line!());
    let logs = sink.drain_logs();
    assert!(logs.contains(&here(line)), "{logs:?} should name line {line}");
    assert!(logs.contains("via macro 1"));

    let (prefix, line) = (logx::location_prefix!(), line!());
    assert!(prefix.contains(&here(line)), "{prefix:?}");
}

#[test]
fn threads_report_their_own_stacks() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let walker = StackWalker::native();
                walker.trace(0, 64, 1)
            })
        })
        .collect();
    for handle in handles {
        let trace = handle.join().expect("Thread should complete successfully");
        assert!(trace.len() <= 64);
    }
}
