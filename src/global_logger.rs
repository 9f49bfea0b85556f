// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! Most code is better served by an explicit [`Logger`] passed to where it is
//! needed. For quick print-style debugging, the crate's macros
//! ([`printf!`](crate::printf), [`print_traced!`](crate::print_traced), ...)
//! log through a global logger instead.
//!
//! # Default Behavior
//!
//! On first use the global logger is built from [`Config::from_env`] and writes
//! to stderr. If the environment holds an invalid setting, the defaults are
//! used and the problem is reported as the first log line.
//!
//! # Thread Safety
//!
//! The logger is held in an [`ArcSwap`]. Every logging call loads it without
//! locking; replacing it is a single atomic store. Lines already being written
//! by the previous logger finish on the previous logger.
//!
//! # Examples
//!
//! ```
//! use logx::{Config, InMemorySink, Logger, set_global_logger};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! set_global_logger(Logger::new(Config::default(), sink.clone()));
//!
//! logx::printf!("cache warmed in {} ms", 12);
//! assert!(sink.drain_logs().contains("cache warmed in 12 ms"));
//! ```

use crate::config::Config;
use crate::console_sink::ConsoleSink;
use crate::logger::Logger;
use crate::sink::Sink;
use arc_swap::ArcSwap;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<ArcSwap<Logger>> = OnceLock::new();

fn initial_logger() -> Logger {
    let sink = Arc::new(ConsoleSink::stderr());
    match Config::from_env() {
        Ok(config) => Logger::new(config, sink),
        Err(err) => {
            let logger = Logger::new(Config::default(), sink);
            logger.print_at(
                file!(),
                line!(),
                format_args!("ignoring logx environment settings: {err}"),
            );
            logger
        }
    }
}

fn slot() -> &'static ArcSwap<Logger> {
    GLOBAL_LOGGER.get_or_init(|| ArcSwap::from_pointee(initial_logger()))
}

/// The current global logger.
pub fn global_logger() -> Arc<Logger> {
    slot().load_full()
}

/// Replaces the global logger, returning the previous one.
pub fn set_global_logger(logger: Logger) -> Arc<Logger> {
    slot().swap(Arc::new(logger))
}

/// Points the global logger at `sink`, keeping its settings.
pub fn log_to(sink: Arc<dyn Sink>) {
    slot().rcu(|current| current.with_sink(sink.clone()));
}

/// Sends global log lines to stdout.
pub fn log_to_stdout() {
    log_to(Arc::new(ConsoleSink::stdout()));
}

/// Silences the global logger until [`enable`] is called.
pub fn disable() {
    global_logger().disable();
}

pub fn enable() {
    global_logger().enable();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use std::sync::Mutex;
    use std::thread;

    static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn set_returns_previous() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let first = Arc::new(InMemorySink::new());
        set_global_logger(Logger::new(Config::default(), first.clone()));
        let previous = set_global_logger(Logger::default());
        previous.printf(format_args!("to first"));
        assert!(first.drain_logs().contains("to first"));
    }

    #[test]
    fn log_to_keeps_config() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let config = Config::default().with_trailing_dirs(0).with_column_width(10);
        set_global_logger(Logger::new(config.clone(), Arc::new(InMemorySink::new())));

        let sink = Arc::new(InMemorySink::new());
        log_to(sink.clone());
        assert_eq!(global_logger().config(), &config);

        global_logger().print(format_args!("after log_to"));
        assert!(sink.drain_logs().contains("after log_to"));
    }

    #[test]
    fn disable_and_enable() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let sink = Arc::new(InMemorySink::new());
        set_global_logger(Logger::new(Config::default(), sink.clone()));

        disable();
        crate::printf!("dropped");
        assert_eq!(sink.drain_logs(), "");

        enable();
        crate::printf!("kept {}", 1);
        assert!(sink.drain_logs().contains("kept 1"));
    }

    #[test]
    fn concurrent_swaps_and_logging() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let sink = Arc::new(InMemorySink::new());
        set_global_logger(Logger::new(Config::default(), sink.clone()));

        let writers: Vec<_> = (0..4)
            .map(|i| {
                thread::spawn(move || {
                    for j in 0..20 {
                        global_logger().print(format_args!("{i}/{j}"));
                    }
                })
            })
            .collect();
        let swapper = {
            let sink = sink.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    log_to(sink.clone());
                }
            })
        };
        for handle in writers {
            handle.join().expect("Thread should complete successfully");
        }
        swapper.join().expect("Thread should complete successfully");

        assert_eq!(sink.drain_lines().len(), 80);
    }
}
