// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request context for debug lines written while serving HTTP requests.
//!
//! How much request context a debug line needs depends on where the program
//! runs. A standalone server has nothing else tying a line to its request, so
//! [`PathAnnotatedDebug`] puts the request path in front of the message. A
//! managed host already attaches request context to everything the process
//! logs, so [`PlainDebug`] leaves the message alone.
//!
//! The choice is made once, by [`select_debug_strategy`], and stored in the
//! [`Logger`](crate::Logger).

use crate::column::pad;
use std::fmt::Debug;
use std::sync::Arc;

/// Adds request context to the message of a debug line.
pub trait ContextualDebug: Debug + Send + Sync {
    fn decorate(&self, request_path: &str, message: String) -> String;
}

/// Prefixes messages with the request path, minus its first segment.
///
/// ```
/// use logx::{ContextualDebug, PathAnnotatedDebug};
///
/// let line = PathAnnotatedDebug.decorate("/app/users/42", "loaded".to_string());
/// assert_eq!(line, "/users/42     loaded");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathAnnotatedDebug;

/// Width below which the request path is padded to a fixed size.
const PATH_MIN_WIDTH: usize = 12;
const PATH_COLUMN_WIDTH: usize = 4;

impl ContextualDebug for PathAnnotatedDebug {
    fn decorate(&self, request_path: &str, message: String) -> String {
        let mut line = pad(
            drop_leading_segment(request_path),
            PATH_MIN_WIDTH,
            PATH_COLUMN_WIDTH,
        );
        line.push_str(&message);
        line
    }
}

/// Leaves messages unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlainDebug;

impl ContextualDebug for PlainDebug {
    fn decorate(&self, _request_path: &str, message: String) -> String {
        message
    }
}

/// Drops the first segment of a request path.
///
/// Applications usually mount all their routes under one prefix, which says
/// nothing in a log line: `/app/users/42` becomes `/users/42`. A path with a
/// single segment becomes everything after its leading slash.
pub fn drop_leading_segment(path: &str) -> &str {
    let path = match path.find('/') {
        Some(slash) => &path[slash + 1..],
        None => path,
    };
    match path.find('/') {
        Some(slash) => &path[slash..],
        None => path,
    }
}

/// The strategy for this build.
///
/// With the `managed_hosting` feature the host supplies request context and
/// [`PlainDebug`] is used; otherwise [`PathAnnotatedDebug`].
pub fn select_debug_strategy() -> Arc<dyn ContextualDebug> {
    #[cfg(feature = "managed_hosting")]
    {
        Arc::new(PlainDebug)
    }
    #[cfg(not(feature = "managed_hosting"))]
    {
        Arc::new(PathAnnotatedDebug)
    }
}
