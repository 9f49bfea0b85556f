// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend for the [`log`] facade.
//!
//! Libraries that log through `log::info!` and friends already know their
//! file and line, so the bridge takes the location from the record instead of
//! walking the stack, then lays the line out like [`Logger::printf`].
//!
//! ```no_run
//! use logx::{Logger, install_log_bridge};
//! use std::sync::Arc;
//!
//! install_log_bridge(Arc::new(Logger::default()), log::LevelFilter::Debug)
//!     .expect("no other log backend");
//! log::info!("connected to {}", "db-1");
//! ```

use crate::error::LogxError;
use crate::logger::Logger;
use log::{LevelFilter, Metadata, Record};
use std::sync::Arc;

/// A [`log::Log`] implementation writing through a [`Logger`].
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        self.logger.is_enabled()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        self.logger.print_at(
            file,
            line,
            format_args!("{:<5} {}", record.level(), record.args()),
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Makes `logger` the backend of the `log` facade.
///
/// Fails with [`LogxError::LoggerAlreadySet`] if a backend is already
/// installed; the facade accepts one per process.
pub fn install_log_bridge(logger: Arc<Logger>, max_level: LevelFilter) -> Result<(), LogxError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}
