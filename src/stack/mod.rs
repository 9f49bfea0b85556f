// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source locations recovered from the call stack.
//!
//! [`StackWalker`] answers "which file and line is N frames above me", with
//! the file path shortened to a few trailing directories. It does not look
//! at the stack itself: that is the job of a [`StackSource`]. The default
//! source, [`NativeStack`], walks the real stack of the calling thread.
//! [`ScriptedStack`] replays fixed frames and is meant for tests.
//!
//! # Skip depth
//!
//! Every query takes a `skip` count. Skip 0 is the function that called the
//! walker, skip 1 is its caller, and so on. Code that wraps the walker must
//! add one for each of its own frames, otherwise the reported location is the
//! wrapper instead of the code being logged.
//!
//! ```
//! use logx::stack::StackWalker;
//!
//! fn locate() -> String {
//!     // skip 1: the caller of `locate`
//!     match StackWalker::native().frame_at(1, 1) {
//!         Ok(frame) => frame.to_string(),
//!         Err(_) => String::new(),
//!     }
//! }
//! let _ = locate();
//! ```

mod native;
mod scripted;

pub use native::NativeStack;
pub use scripted::ScriptedStack;

use crate::error::LogxError;
use std::fmt::{Debug, Display};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Symbol prefix shared by every function of the walker machinery.
///
/// [`NativeStack`] hides frames under this prefix so that skip counting
/// starts at the walker's caller.
pub(crate) const WALKER_MODULE: &str = concat!(module_path!(), "::");

/// A frame as reported by a [`StackSource`], before path shortening.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawFrame {
    /// Source file of the frame, when debug info is available.
    pub file: Option<PathBuf>,
    /// 1-based line, or 0 when unknown.
    pub line: u32,
}

impl RawFrame {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line,
        }
    }

    /// A frame that exists but carries no location.
    pub const fn unknown() -> Self {
        Self {
            file: None,
            line: 0,
        }
    }
}

/// Capability to inspect the current thread's call stack.
///
/// `skip` is relative to the caller of the [`StackWalker`] method that is
/// asking, see the [module docs](self).
pub trait StackSource: Debug + Send + Sync {
    /// Returns the frame `skip` levels up, or `None` past the top of the stack.
    fn frame(&self, skip: usize) -> Option<RawFrame>;

    /// Returns up to `count` consecutive frames starting at `skip`.
    ///
    /// The result stops at the top of the stack. Implementations that can
    /// walk the stack once should override this.
    fn frames(&self, skip: usize, count: usize) -> Vec<RawFrame> {
        (skip..skip.saturating_add(count))
            .map_while(|depth| self.frame(depth))
            .collect()
    }
}

/// One resolved stack entry with a shortened path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    pub line: u32,
    pub path: String,
}

impl StackFrame {
    fn from_raw(raw: RawFrame, trailing_dirs: usize) -> Self {
        let path = match raw.file {
            Some(file) => shorten_path(file, trailing_dirs),
            None => "<unknown>".to_string(),
        };
        Self {
            line: raw.line,
            path,
        }
    }
}

/// Formats as `path:line`.
impl Display for StackFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Keeps the file name and the `trailing_dirs` directories above it.
///
/// Paths with fewer directories are returned with whatever they have; root,
/// drive prefixes, `.` and `..` are not counted as directories. A root is
/// never used to fill up missing directories, so `/file.go` stays `file.go`.
/// Never fails.
///
/// ```
/// use logx::stack::shorten_path;
/// assert_eq!(shorten_path("/a/b/c/d/file.go", 2), format!("c{0}d{0}file.go", std::path::MAIN_SEPARATOR));
/// assert_eq!(shorten_path("/file.go", 2), "file.go");
/// ```
pub fn shorten_path(full_path: impl AsRef<Path>, trailing_dirs: usize) -> String {
    let segments: Vec<_> = full_path
        .as_ref()
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment),
            _ => None,
        })
        .collect();
    let keep = trailing_dirs.saturating_add(1);
    let start = segments.len().saturating_sub(keep);
    segments[start..]
        .iter()
        .collect::<PathBuf>()
        .display()
        .to_string()
}

/// Resolves call-stack depths to shortened source locations.
#[derive(Debug, Clone)]
pub struct StackWalker {
    source: Arc<dyn StackSource>,
}

impl StackWalker {
    pub fn new(source: Arc<dyn StackSource>) -> Self {
        Self { source }
    }

    /// A walker over the real call stack.
    pub fn native() -> Self {
        Self::new(Arc::new(NativeStack::new()))
    }

    /// Line and shortened path of the frame `skip` levels above the caller.
    ///
    /// [`LogxError::NoStackFrame`] means the stack is not that deep.
    #[inline(never)]
    pub fn frame_at(&self, skip: usize, trailing_dirs: usize) -> Result<StackFrame, LogxError> {
        self.source
            .frame(skip)
            .map(|raw| StackFrame::from_raw(raw, trailing_dirs))
            .ok_or(LogxError::NoStackFrame { skip })
    }

    /// Frames for depths `start_skip .. start_skip + count`.
    ///
    /// Shorter than `count` when the top of the stack is reached first.
    #[inline(never)]
    pub fn trace(&self, start_skip: usize, count: usize, trailing_dirs: usize) -> Vec<StackFrame> {
        self.source
            .frames(start_skip, count)
            .into_iter()
            .take(count)
            .map(|raw| StackFrame::from_raw(raw, trailing_dirs))
            .collect()
    }

    /// Full, unshortened source file of the frame `skip` levels above the caller.
    #[inline(never)]
    pub fn source_file(&self, skip: usize) -> Result<PathBuf, LogxError> {
        self.source
            .frame(skip)
            .and_then(|raw| raw.file)
            .ok_or(LogxError::NoStackFrame { skip })
    }
}

impl Default for StackWalker {
    fn default() -> Self {
        Self::native()
    }
}
