// SPDX-License-Identifier: MIT OR Apache-2.0

//! Macros logging through the [global logger](crate::global_logger).
//!
//! Each macro expands to a direct method call on the global logger from the
//! caller's own function, so the reported location is the macro call site.
//! They take `format!`-style arguments.
//!
//! ```rust
//! let port = 8080;
//! logx::printf!("listening on {port}");
//! logx::print_traced!("unexpected state {}", "closed");
//! logx::debug_request!("/app/users/42", "user {} loaded", 42);
//! ```

/// Logs a padded message under the caller's location.
///
/// See [`Logger::printf`](crate::Logger::printf).
#[macro_export]
macro_rules! printf {
    ($($arg:tt)*) => {
        $crate::global_logger().printf(::core::format_args!($($arg)*))
    };
}

/// Logs a message as is under the caller's location.
///
/// See [`Logger::print`](crate::Logger::print).
#[macro_export]
macro_rules! print_plain {
    ($($arg:tt)*) => {
        $crate::global_logger().print(::core::format_args!($($arg)*))
    };
}

/// Logs a message followed by the frames above the caller.
///
/// See [`Logger::print_traced`](crate::Logger::print_traced).
#[macro_export]
macro_rules! print_traced {
    ($($arg:tt)*) => {
        $crate::global_logger().print_traced(::core::format_args!($($arg)*))
    };
}

/// Logs a debug line for the request at the given path.
///
/// See [`Logger::debug_request`](crate::Logger::debug_request).
#[macro_export]
macro_rules! debug_request {
    ($path:expr, $($arg:tt)*) => {
        $crate::global_logger().debug_request($path, ::core::format_args!($($arg)*))
    };
}

/// Logs the caller's stack trace.
///
/// Without arguments, four frames with two trailing directories each.
/// Otherwise `(extra_skip, count, trailing_dirs)` as for
/// [`Logger::print_stack_trace`](crate::Logger::print_stack_trace).
#[macro_export]
macro_rules! print_stack_trace {
    () => {
        $crate::global_logger().print_stack_trace(0, 4, 2)
    };
    ($extra_skip:expr, $count:expr, $trailing_dirs:expr) => {
        $crate::global_logger().print_stack_trace($extra_skip, $count, $trailing_dirs)
    };
}

/// The caller's padded `path:line`.
#[macro_export]
macro_rules! location_prefix {
    () => {
        $crate::global_logger().location_prefix()
    };
}
