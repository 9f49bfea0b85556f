// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Stack introspection backed by the unwinder.

Frames are resolved through debug info, so builds without line tables report
frames with unknown locations. Inlined calls are listed as separate frames
when the debug info describes them.
*/

use super::{RawFrame, StackSource, WALKER_MODULE};
use std::path::Path;

/// Walks the real call stack of the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeStack;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Unwinder frames below the first walker frame.
    Searching,
    /// Inside the walker, skipping its frames.
    InWalker,
    /// Past the walker; every symbol counts.
    Counting,
}

/// True when `name` has a path starting at [`WALKER_MODULE`].
///
/// A match must begin a path, so `mylogx::stack::` or `app::logx::stack::`
/// do not count as the walker.
fn is_walker(name: &str) -> bool {
    name.match_indices(WALKER_MODULE).any(|(at, _)| {
        name[..at]
            .chars()
            .next_back()
            .is_none_or(|before| !(before.is_alphanumeric() || before == '_' || before == ':'))
    })
}

fn is_machinery(name: &str) -> bool {
    is_walker(name)
        || name.starts_with("backtrace::")
        || name.starts_with("<backtrace::")
        || name.starts_with("_Unwind")
}

/// The symbols of one physical frame, innermost inlined call first.
///
/// A frame without debug info still yields one symbol with no name.
struct PhysicalFrame {
    symbols: Vec<(String, RawFrame)>,
}

impl PhysicalFrame {
    fn resolve(frame: &backtrace::Frame) -> Self {
        let mut symbols = Vec::new();
        backtrace::resolve_frame(frame, |symbol| {
            let name = symbol.name().map(|name| name.to_string()).unwrap_or_default();
            let raw = RawFrame {
                file: symbol.filename().map(Path::to_path_buf),
                line: symbol.lineno().unwrap_or(0),
            };
            symbols.push((name, raw));
        });
        if symbols.is_empty() {
            symbols.push((String::new(), RawFrame::unknown()));
        }
        Self { symbols }
    }

    fn has_walker(&self) -> bool {
        self.symbols.iter().any(|(name, _)| is_walker(name))
    }

    /// Std functions inlined into a walker function resolve as extra symbols
    /// of its frame, so the whole frame is machinery if any symbol is.
    fn has_machinery(&self) -> bool {
        self.symbols.iter().any(|(name, _)| is_machinery(name))
    }
}

impl NativeStack {
    pub const fn new() -> Self {
        Self
    }

    #[inline(never)]
    fn walk(&self, skip: usize, count: usize) -> Vec<RawFrame> {
        let mut frames = Vec::new();
        if count == 0 {
            return frames;
        }
        let mut phase = Phase::Searching;
        let mut visible = 0usize;

        backtrace::trace(|frame| {
            let physical = PhysicalFrame::resolve(frame);
            match phase {
                Phase::Searching => {
                    if physical.has_walker() {
                        phase = Phase::InWalker;
                    }
                    return true;
                }
                Phase::InWalker => {
                    if physical.has_machinery() {
                        return true;
                    }
                    phase = Phase::Counting;
                }
                Phase::Counting => {}
            }
            for (_, raw) in physical.symbols {
                if visible >= skip {
                    frames.push(raw);
                    if frames.len() == count {
                        return false;
                    }
                }
                visible += 1;
            }
            true
        });
        frames
    }
}

impl StackSource for NativeStack {
    #[inline(never)]
    fn frame(&self, skip: usize) -> Option<RawFrame> {
        self.walk(skip, 1).pop()
    }

    #[inline(never)]
    fn frames(&self, skip: usize, count: usize) -> Vec<RawFrame> {
        self.walk(skip, count)
    }
}
