// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layout and stack-depth settings for a [`Logger`](crate::Logger).
//!
//! A [`Config`] is fixed once a logger is built. To change settings at
//! runtime, build a new logger and swap it in with
//! [`set_global_logger`](crate::set_global_logger).
//!
//! ```
//! use logx::Config;
//!
//! let config = Config::default()
//!     .with_trailing_dirs(1)
//!     .with_column_width(8);
//! assert_eq!(config.trailing_dirs, 1);
//! assert_eq!(config.column_width, 8);
//! ```

use crate::error::LogxError;
use std::str::FromStr;

/// Environment variable overriding [`Config::base_skip`].
pub const ENV_BASE_SKIP: &str = "LOGX_BASE_SKIP";
/// Environment variable overriding [`Config::trailing_dirs`].
pub const ENV_TRAILING_DIRS: &str = "LOGX_TRAILING_DIRS";
/// Environment variable overriding [`Config::column_width`].
pub const ENV_COLUMN_WIDTH: &str = "LOGX_COLUMN_WIDTH";
/// Environment variable overriding [`Config::trace_frames`].
pub const ENV_TRACE_FRAMES: &str = "LOGX_TRACE_FRAMES";
/// Environment variable overriding [`Config::timestamps`].
pub const ENV_TIMESTAMPS: &str = "LOGX_TIMESTAMPS";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Extra frames to skip before the reported location.
    ///
    /// Set this to the number of wrapper functions an application puts
    /// around the logger, so lines point at the wrapper's caller.
    pub base_skip: usize,
    /// Directories kept in front of the file name in the location prefix.
    pub trailing_dirs: usize,
    /// Tab-stop spacing of the location prefix.
    pub column_width: usize,
    /// Width below which the location prefix is padded to a fixed size.
    pub prefix_min_width: usize,
    pub body_min_width: usize,
    pub body_column_width: usize,
    pub trace_min_width: usize,
    pub trace_column_width: usize,
    /// Frames rendered by [`Logger::print_traced`](crate::Logger::print_traced).
    pub trace_frames: usize,
    /// Prefix each line with the time elapsed since the first timestamp.
    pub timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_skip: 0,
            trailing_dirs: 2,
            column_width: 6,
            prefix_min_width: 8,
            body_min_width: 56,
            body_column_width: 4,
            trace_min_width: 12,
            trace_column_width: 12,
            trace_frames: 5,
            timestamps: false,
        }
    }
}

impl Config {
    pub fn with_base_skip(mut self, base_skip: usize) -> Self {
        self.base_skip = base_skip;
        self
    }

    pub fn with_trailing_dirs(mut self, trailing_dirs: usize) -> Self {
        self.trailing_dirs = trailing_dirs;
        self
    }

    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_body_layout(mut self, min_width: usize, column_width: usize) -> Self {
        self.body_min_width = min_width;
        self.body_column_width = column_width;
        self
    }

    pub fn with_trace_frames(mut self, trace_frames: usize) -> Self {
        self.trace_frames = trace_frames;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /**
    Defaults, overridden by any `LOGX_*` variables set in the environment.

    Unset variables keep their default. A variable that is set but does not
    parse is an error rather than silently ignored.
    */
    pub fn from_env() -> Result<Self, LogxError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LogxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_BASE_SKIP) {
            config.base_skip = parse_var(ENV_BASE_SKIP, &value)?;
        }
        if let Some(value) = lookup(ENV_TRAILING_DIRS) {
            config.trailing_dirs = parse_var(ENV_TRAILING_DIRS, &value)?;
        }
        if let Some(value) = lookup(ENV_COLUMN_WIDTH) {
            config.column_width = parse_var(ENV_COLUMN_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_TRACE_FRAMES) {
            config.trace_frames = parse_var(ENV_TRACE_FRAMES, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMESTAMPS) {
            config.timestamps = parse_flag(ENV_TIMESTAMPS, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Rejects column widths of zero.
    pub fn validate(&self) -> Result<(), LogxError> {
        let widths = [
            (ENV_COLUMN_WIDTH, self.column_width),
            ("body_column_width", self.body_column_width),
            ("trace_column_width", self.trace_column_width),
        ];
        for (key, width) in widths {
            if width == 0 {
                return Err(LogxError::InvalidConfig {
                    key,
                    value: width.to_string(),
                    reason: "column width must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, LogxError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| LogxError::InvalidConfig {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, LogxError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LogxError::InvalidConfig {
            key,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
